use chrono::Local;
use nplace_client::NplaceClient;
use uuid::Uuid;

use crate::progress::{self, Spinner};
use crate::render::{self, NavItem};
use crate::views::DashboardView;

/// Print every store with its keyword ranks.
///
/// # Errors
///
/// Returns an error if the dashboard cannot be fetched.
pub(crate) async fn run_dashboard(
    client: &NplaceClient,
    concurrency: usize,
) -> anyhow::Result<()> {
    let mut view = DashboardView::new(client.clone(), concurrency);
    let spinner = Spinner::new("Loading dashboard...");
    view.refresh().await;
    spinner.finish_clear();

    if let Some(message) = view.error {
        anyhow::bail!(message);
    }
    print!("{}", render::header(Some(NavItem::Dashboard)));
    println!("{}", render::dashboard_table(&view.stores, &Local));
    Ok(())
}

/// Collect every active keyword of a store and print the refreshed ranks.
///
/// Individual keyword failures are listed but do not fail the command; it
/// fails only when the dashboard itself cannot be loaded or the store is
/// unknown.
///
/// # Errors
///
/// Returns an error if the dashboard cannot be loaded or `store_id` is not
/// on it.
pub(crate) async fn run_collect_all(
    client: &NplaceClient,
    store_id: Uuid,
    concurrency: usize,
) -> anyhow::Result<()> {
    let mut view = DashboardView::new(client.clone(), concurrency);
    let spinner = Spinner::new("Loading dashboard...");
    view.refresh().await;
    if let Some(message) = view.error.take() {
        spinner.finish_clear();
        anyhow::bail!(message);
    }

    let active = view
        .store(store_id)
        .map_or(0, |s| s.active_keywords().count());
    spinner.set_message(&format!("Collecting {active} keywords..."));
    let report = match view.collect_all(store_id).await {
        Ok(report) => report,
        Err(e) => {
            spinner.finish_clear();
            anyhow::bail!(e.user_message("collect-all failed"));
        }
    };

    let summary = format!("collected {report} keywords");
    if report.succeeded() == report.total() {
        spinner.finish_success(&summary);
    } else {
        spinner.finish_warning(&summary);
        for outcome in report.failures() {
            if let Err(message) = &outcome.result {
                progress::error(&format!("{}: {message}", outcome.keyword));
            }
        }
    }

    if let Some(message) = &view.error {
        progress::warning(&format!("could not refresh dashboard: {message}"));
    } else if let Some(store) = view.store(store_id) {
        println!();
        println!("{}", render::dashboard_table(std::slice::from_ref(store), &Local));
    }
    Ok(())
}
