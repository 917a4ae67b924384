//! Column-aligned tables for stores, keywords, the dashboard and history.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use console::{measure_text_width, pad_str, Alignment};
use nplace_core::{DashboardStore, RankingSnapshot, Store, StoreSummary, TrackedKeyword};

use super::badge::{rank_label, styled_change, styled_rank};

const MISSING: &str = "-";

/// Count with thousands separators, or `-` when missing.
#[must_use]
pub fn format_count(value: Option<i64>) -> String {
    let Some(n) = value else {
        return MISSING.to_string();
    };
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn local_time<Tz>(ts: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string()
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Pads a possibly styled cell to `width` display columns. Text that fills
/// the column still gets one trailing space so cells never touch.
fn cell(text: &str, width: usize) -> String {
    if measure_text_width(text) >= width {
        return format!("{text} ");
    }
    pad_str(text, width, Alignment::Left, None).into_owned()
}

#[must_use]
pub fn store_table(stores: &[Store]) -> String {
    if stores.is_empty() {
        return "no stores registered; run `stores register PLACE_ID` first".to_string();
    }
    let mut lines = vec![format!(
        "{:<38}{:<14}{:<28}CATEGORY",
        "ID", "PLACE ID", "NAME"
    )];
    for store in stores {
        lines.push(format!(
            "{}{}{}{}",
            cell(&store.id.to_string(), 38),
            cell(&store.naver_place_id, 14),
            cell(&store.name, 28),
            store.category.as_deref().unwrap_or(MISSING)
        ));
    }
    lines.join("\n")
}

#[must_use]
pub fn keyword_table(keywords: &[TrackedKeyword]) -> String {
    if keywords.is_empty() {
        return "no keywords tracked for this store".to_string();
    }
    let mut lines = vec![format!(
        "{:<38}{:<24}{:<8}{:<7}TIME",
        "ID", "KEYWORD", "ACTIVE", "ALERT"
    )];
    for keyword in keywords {
        let time = keyword
            .collection_time
            .map_or_else(|| MISSING.to_string(), |t| t.to_string());
        lines.push(format!(
            "{}{}{:<8}{:<7}{}",
            cell(&keyword.id.to_string(), 38),
            cell(&keyword.keyword, 24),
            yes_no(keyword.is_active),
            yes_no(keyword.alert_enabled),
            time
        ));
    }
    lines.join("\n")
}

/// One block per store: a heading, then a row per keyword with its badge and
/// change indicator.
#[must_use]
pub fn dashboard_table<Tz>(stores: &[DashboardStore], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if stores.is_empty() {
        return "no stores registered; run `stores register PLACE_ID` first".to_string();
    }
    let mut blocks = Vec::with_capacity(stores.len());
    for store in stores {
        let mut lines = vec![format!(
            "{} ({})  [{}]",
            store.display_name(),
            store.naver_place_id,
            store.id
        )];
        if store.keywords.is_empty() {
            lines.push("  no keywords tracked".to_string());
        } else {
            lines.push(format!(
                "  {:<38}{:<24}{:<7}{:<7}{:<10}{:<10}{:<8}COLLECTED AT",
                "ID", "KEYWORD", "RANK", "CHANGE", "VISITORS", "REVIEWS", "ACTIVE"
            ));
            for k in &store.keywords {
                let collected = k
                    .latest_collected_at
                    .map_or_else(|| MISSING.to_string(), |ts| local_time(ts, tz));
                lines.push(format!(
                    "  {}{}{}{}{:<10}{:<10}{:<8}{}",
                    cell(&k.id.to_string(), 38),
                    cell(&k.keyword, 24),
                    cell(&styled_rank(k.latest_rank), 7),
                    cell(&styled_change(k.rank_change), 7),
                    format_count(k.latest_visitor_count),
                    format_count(k.latest_blog_review_count),
                    yes_no(k.is_active),
                    collected
                ));
            }
        }
        blocks.push(lines.join("\n"));
    }
    blocks.join("\n\n")
}

#[must_use]
pub fn store_summary_table<Tz>(summary: &StoreSummary, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let name = summary.name.as_deref().unwrap_or(&summary.naver_place_id);
    let mut lines = vec![format!("{name} ({})", summary.naver_place_id)];
    if let Some(category) = &summary.category {
        lines.push(format!("Category: {category}"));
    }
    if let Some(address) = &summary.address {
        lines.push(format!("Address: {address}"));
    }
    lines.push(String::new());
    if summary.keywords.is_empty() {
        lines.push("no keywords tracked".to_string());
        return lines.join("\n");
    }
    lines.push(format!("{:<24}{:<7}{:<8}COLLECTED AT", "KEYWORD", "RANK", "ACTIVE"));
    for k in &summary.keywords {
        let rank = k.latest_rank.as_ref().and_then(|s| s.rank_position);
        let collected = k
            .latest_rank
            .as_ref()
            .map_or_else(|| MISSING.to_string(), |s| local_time(s.collected_at, tz));
        lines.push(format!(
            "{}{}{:<8}{}",
            cell(&k.keyword, 24),
            cell(&styled_rank(rank), 7),
            yes_no(k.is_active),
            collected
        ));
    }
    lines.join("\n")
}

/// Snapshot rows in the order given. Missing ranks read `no rank`.
#[must_use]
pub fn history_table<Tz>(rows: &[&RankingSnapshot], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if rows.is_empty() {
        return "no rankings collected in this range".to_string();
    }
    let mut lines = vec![format!(
        "{:<18}{:<9}{:<10}{:<10}BLOG REVIEWS",
        "COLLECTED AT", "RANK", "TOTAL", "VISITORS"
    )];
    for s in rows {
        let rank = if s.rank_position.is_some() {
            rank_label(s.rank_position)
        } else {
            "no rank".to_string()
        };
        lines.push(format!(
            "{:<18}{:<9}{:<10}{:<10}{}",
            local_time(s.collected_at, tz),
            rank,
            format_count(s.total_results),
            format_count(s.visitor_count),
            format_count(s.blog_review_count)
        ));
    }
    lines.join("\n")
}
