//! Command handlers for the CLI.
//!
//! Each handler builds the view it needs from the shared client, drives it,
//! and prints the rendered result. Failures surface as `anyhow` errors
//! carrying the user-facing message.

mod dashboard;
mod history;
mod keywords;
mod stores;

use chrono::NaiveDate;
use clap::{ArgGroup, Subcommand};
use nplace_core::CollectionTime;
use uuid::Uuid;

pub(crate) use dashboard::{run_collect_all, run_dashboard};
pub(crate) use history::run_history;
pub(crate) use keywords::{
    run_keywords_add, run_keywords_collect, run_keywords_delete, run_keywords_list,
    run_keywords_toggle,
};
pub(crate) use stores::{
    run_stores_delete, run_stores_list, run_stores_register, run_stores_show, run_stores_summary,
};

/// Sub-commands available under `dashboard`.
#[derive(Debug, Subcommand)]
pub enum DashboardCommands {
    /// Collect every active keyword of a store now
    CollectAll {
        /// Store id
        #[arg(long)]
        store: Uuid,
    },
}

/// Sub-commands available under `stores`.
#[derive(Debug, Subcommand)]
pub enum StoreCommands {
    /// List registered stores
    List,
    /// Register a store by its Naver place id
    Register {
        /// Naver place id (digits from the place URL)
        place_id: String,
    },
    /// Delete a store and its keywords
    Delete {
        /// Store id
        id: Uuid,
    },
    /// Show a store and its keywords
    Show {
        /// Store id
        id: Uuid,
    },
    /// Show a store's latest rank per keyword
    Summary {
        /// Store id
        id: Uuid,
    },
}

/// Sub-commands available under `keywords`.
#[derive(Debug, Subcommand)]
pub enum KeywordCommands {
    /// List tracked keywords of a store
    List {
        /// Store id
        #[arg(long)]
        store: Uuid,
    },
    /// Start tracking a keyword for a store
    Add {
        /// Store id
        #[arg(long)]
        store: Uuid,
        /// Search keyword
        keyword: String,
        /// Daily collection slot (HH:00)
        #[arg(long)]
        time: Option<CollectionTime>,
        /// Enable rank-change alerts
        #[arg(long)]
        alert: bool,
    },
    /// Flip the active or alert flag of a keyword
    #[command(group(ArgGroup::new("flag").required(true).args(["active", "alert"])))]
    Toggle {
        /// Keyword id
        id: Uuid,
        /// Toggle whether the keyword is collected
        #[arg(long)]
        active: bool,
        /// Toggle rank-change alerts
        #[arg(long)]
        alert: bool,
    },
    /// Stop tracking a keyword
    Delete {
        /// Keyword id
        id: Uuid,
    },
    /// Collect the current rank of a keyword now
    Collect {
        /// Keyword id
        id: Uuid,
    },
}

/// Arguments of `history`.
#[derive(Debug, clap::Args)]
pub struct HistoryArgs {
    /// Keyword id
    pub keyword_id: Uuid,
    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}
