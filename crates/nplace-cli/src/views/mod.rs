//! Locally held view state for each screen, refreshed from the API.
//!
//! Views never mutate their local copy until the backend confirms a change.

pub mod add_keyword;
pub mod dashboard;
pub mod history;
pub mod keywords;
pub mod stores;
pub mod submit;

#[cfg(test)]
pub(crate) mod test_support;

pub use add_keyword::AddKeywordDialog;
pub use dashboard::DashboardView;
pub use history::RankingHistory;
pub use keywords::KeywordManager;
pub use stores::{RegisterForm, StoreDirectory};
pub use submit::SubmitState;
