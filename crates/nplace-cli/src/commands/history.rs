use chrono::Local;
use nplace_client::NplaceClient;
use nplace_core::RankingRange;

use super::HistoryArgs;
use crate::progress::Spinner;
use crate::render::{self, ChartOptions};
use crate::views::RankingHistory;

/// Print the rank chart and snapshot table of one keyword.
///
/// # Errors
///
/// Returns an error if `--from` is later than `--to` or the history cannot
/// be fetched.
pub(crate) async fn run_history(client: &NplaceClient, args: &HistoryArgs) -> anyhow::Result<()> {
    let range = RankingRange::new(args.from, args.to)?;

    let mut history = RankingHistory::new(client.clone(), args.keyword_id);
    let spinner = Spinner::new("Loading ranking history...");
    history.load(range).await;
    spinner.finish_clear();

    if let Some(message) = history.error.take() {
        anyhow::bail!(message);
    }

    print!("{}", render::header(None));
    match &history.keyword {
        Some(keyword) => println!("Ranking history: \"{}\"", keyword.keyword),
        None => println!("Ranking history: {}", args.keyword_id),
    }
    println!();
    println!(
        "{}",
        render::render_chart(&history.chart(), &Local, ChartOptions::default())
    );
    println!();
    println!("{}", render::history_table(&history.rows(), &Local));
    Ok(())
}
