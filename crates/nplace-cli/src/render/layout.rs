//! App header with the navigation items.

use console::style;

pub const APP_NAME: &str = "Naver Place Rank Tracker";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    RegisterStore,
    KeywordTracking,
}

impl NavItem {
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::RegisterStore, Self::KeywordTracking];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::RegisterStore => "Register store",
            Self::KeywordTracking => "Keyword tracking",
        }
    }
}

/// Two-line header: the app name, then the nav items with `active` marked.
/// `None` marks nothing (detail screens outside the nav).
#[must_use]
pub fn header(active: Option<NavItem>) -> String {
    let nav: Vec<String> = NavItem::ALL
        .iter()
        .map(|&item| {
            if Some(item) == active {
                style(format!("[{}]", item.label())).cyan().bold().to_string()
            } else {
                format!(" {} ", item.label())
            }
        })
        .collect();
    format!("{}\n{}\n", style(APP_NAME).bold(), nav.join("  "))
}
