//! Terminal presentation of views. Every function returns a `String`;
//! printing is left to the command handlers.

pub mod badge;
pub mod chart;
pub mod layout;
pub mod table;

pub use badge::rank_label;
pub use chart::{render_chart, ChartOptions};
pub use layout::{header, NavItem};
pub use table::{
    dashboard_table, format_count, history_table, keyword_table, store_summary_table, store_table,
};
