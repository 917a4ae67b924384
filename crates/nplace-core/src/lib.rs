pub mod app_config;
pub mod chart;
pub mod collection_time;
pub mod config;
pub mod error;
pub mod range;
pub mod rank;
pub mod types;

pub use app_config::{AppConfig, Environment};
pub use chart::{chart_series, rank_axis, ChartPoint, RankAxis};
pub use collection_time::CollectionTime;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use range::RankingRange;
pub use rank::{RankChange, RankTier};
pub use types::{
    DashboardKeyword, DashboardStore, KeywordFlag, KeywordUpdate, KeywordWithRank, NewKeyword,
    NewStore, RankingSnapshot, Store, StoreSummary, TrackedKeyword,
};
