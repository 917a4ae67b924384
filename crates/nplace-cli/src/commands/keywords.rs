use nplace_client::NplaceClient;
use nplace_core::{CollectionTime, KeywordFlag};
use uuid::Uuid;

use crate::progress::Spinner;
use crate::render::{self, NavItem};
use crate::views::keywords::{ADD_FAILED, COLLECT_FAILED, DELETE_FAILED, UPDATE_FAILED};
use crate::views::{AddKeywordDialog, KeywordManager};

/// List the tracked keywords of a store.
///
/// # Errors
///
/// Returns an error if the keyword list cannot be fetched.
pub(crate) async fn run_keywords_list(
    client: &NplaceClient,
    store_id: Uuid,
) -> anyhow::Result<()> {
    let mut manager = KeywordManager::new(client.clone(), store_id);
    let spinner = Spinner::new("Loading keywords...");
    manager.refresh().await;
    spinner.finish_clear();

    if let Some(message) = manager.error {
        anyhow::bail!(message);
    }
    print!("{}", render::header(Some(NavItem::KeywordTracking)));
    if let Some(store) = &manager.store {
        println!("{} ({})", store.name, store.naver_place_id);
        println!();
    }
    println!("{}", render::keyword_table(&manager.keywords));
    Ok(())
}

/// Rejects a requested slot the add-keyword dialog would not offer.
fn ensure_selectable_slot(time: Option<CollectionTime>) -> anyhow::Result<()> {
    match time {
        Some(t) if !CollectionTime::slots().any(|slot| slot == t) => {
            anyhow::bail!("collection time {t} is not on the hour; pick one of 00:00 through 23:00")
        }
        _ => Ok(()),
    }
}

/// Start tracking a keyword. Without `--time` or `--alert` the backend's
/// defaults apply; otherwise the full dialog request is sent.
///
/// # Errors
///
/// Returns an error if the keyword is blank, the slot is not on the hour,
/// or the backend refuses the keyword.
pub(crate) async fn run_keywords_add(
    client: &NplaceClient,
    store_id: Uuid,
    keyword: &str,
    time: Option<CollectionTime>,
    alert: bool,
) -> anyhow::Result<()> {
    if keyword.trim().is_empty() {
        anyhow::bail!("keyword must not be empty");
    }
    ensure_selectable_slot(time)?;

    let mut manager = KeywordManager::new(client.clone(), store_id);
    let spinner = Spinner::new(&format!("Adding \"{}\"...", keyword.trim()));
    let created = if time.is_none() && !alert {
        manager
            .add(keyword)
            .await
            .map_err(|e| e.user_message(ADD_FAILED))
    } else {
        let mut dialog = AddKeywordDialog::new(keyword);
        if let Some(slot) = time {
            dialog.collection_time = slot;
        }
        dialog.alert_enabled = alert;
        dialog
            .submit(&mut manager)
            .await
            .ok_or_else(|| dialog.state.error().unwrap_or(ADD_FAILED).to_string())
    };

    match created {
        Ok(k) => {
            let slot = k
                .collection_time
                .map_or_else(|| "default time".to_string(), |t| t.to_string());
            spinner.finish_success(&format!(
                "tracking \"{}\" daily at {slot} ({})",
                k.keyword, k.id
            ));
            Ok(())
        }
        Err(message) => {
            spinner.finish_clear();
            anyhow::bail!(message)
        }
    }
}

/// Flip one flag of a keyword.
///
/// # Errors
///
/// Returns an error if the keyword cannot be found or the update is refused.
pub(crate) async fn run_keywords_toggle(
    client: &NplaceClient,
    keyword_id: Uuid,
    flag: KeywordFlag,
) -> anyhow::Result<()> {
    let spinner = Spinner::new("Updating keyword...");
    let current = match client.get_keyword(keyword_id).await {
        Ok(k) => k,
        Err(e) => {
            spinner.finish_clear();
            anyhow::bail!(e.user_message(UPDATE_FAILED));
        }
    };

    let mut manager = KeywordManager::new(client.clone(), current.store_id);
    manager.keywords.push(current);
    match manager.toggle(keyword_id, flag).await {
        Ok(updated) => {
            let (name, value) = match flag {
                KeywordFlag::Active => ("active", updated.is_active),
                KeywordFlag::Alert => ("alerts", updated.alert_enabled),
            };
            let state = if value { "on" } else { "off" };
            spinner.finish_success(&format!("\"{}\": {name} {state}", updated.keyword));
            Ok(())
        }
        Err(_) => {
            spinner.finish_clear();
            let message = manager.action_error.unwrap_or_else(|| UPDATE_FAILED.to_string());
            anyhow::bail!(message)
        }
    }
}

/// Stop tracking a keyword.
///
/// # Errors
///
/// Returns an error if the backend refuses the deletion.
pub(crate) async fn run_keywords_delete(
    client: &NplaceClient,
    keyword_id: Uuid,
) -> anyhow::Result<()> {
    let spinner = Spinner::new("Deleting keyword...");
    match client.delete_keyword(keyword_id).await {
        Ok(()) => {
            spinner.finish_success(&format!("deleted keyword {keyword_id}"));
            Ok(())
        }
        Err(e) => {
            spinner.finish_clear();
            anyhow::bail!(e.user_message(DELETE_FAILED))
        }
    }
}

/// Collect a keyword's current rank immediately.
///
/// # Errors
///
/// Returns an error if the collection request fails.
pub(crate) async fn run_keywords_collect(
    client: &NplaceClient,
    keyword_id: Uuid,
) -> anyhow::Result<()> {
    let spinner = Spinner::new("Collecting ranking...");
    let keyword = match client.get_keyword(keyword_id).await {
        Ok(k) => k,
        Err(e) => {
            spinner.finish_clear();
            anyhow::bail!(e.user_message(COLLECT_FAILED));
        }
    };

    let mut manager = KeywordManager::new(client.clone(), keyword.store_id);
    let text = keyword.keyword.clone();
    manager.keywords.push(keyword);
    match manager.collect(keyword_id).await {
        Ok(snapshot) => {
            let message = match snapshot.rank_position {
                Some(_) => format!(
                    "\"{text}\": {} of {} results",
                    render::rank_label(snapshot.rank_position),
                    render::format_count(snapshot.total_results)
                ),
                None => format!("\"{text}\": store not found in the results"),
            };
            spinner.finish_success(&message);
            Ok(())
        }
        Err(_) => {
            spinner.finish_clear();
            let message = manager
                .action_error
                .unwrap_or_else(|| COLLECT_FAILED.to_string());
            anyhow::bail!(message)
        }
    }
}
