use chrono::Local;
use nplace_client::NplaceClient;
use uuid::Uuid;

use crate::progress::{self, Spinner};
use crate::render::{self, NavItem};
use crate::views::stores::DELETE_FAILED;
use crate::views::{KeywordManager, RegisterForm, StoreDirectory};

/// List registered stores.
///
/// # Errors
///
/// Returns an error if the store list cannot be fetched.
pub(crate) async fn run_stores_list(client: &NplaceClient) -> anyhow::Result<()> {
    let mut directory = StoreDirectory::new(client.clone());
    let spinner = Spinner::new("Loading stores...");
    directory.refresh().await;
    spinner.finish_clear();

    if let Some(message) = directory.error {
        anyhow::bail!(message);
    }
    print!("{}", render::header(Some(NavItem::RegisterStore)));
    println!("{}", render::store_table(&directory.stores));
    Ok(())
}

/// Register a store by place id.
///
/// # Errors
///
/// Returns an error with the backend's message when registration is refused
/// (for example a duplicate place id), or if the place id is blank.
pub(crate) async fn run_stores_register(
    client: &NplaceClient,
    place_id: &str,
) -> anyhow::Result<()> {
    if place_id.trim().is_empty() {
        anyhow::bail!("place id must not be empty");
    }
    let mut directory = StoreDirectory::new(client.clone());
    let mut form = RegisterForm::new(place_id);

    let spinner = Spinner::new(&format!("Registering place {}...", place_id.trim()));
    match form.submit(&mut directory).await {
        Some(store) => {
            spinner.finish_success(&format!(
                "registered {} ({}) as {}",
                store.name, store.naver_place_id, store.id
            ));
            Ok(())
        }
        None => {
            spinner.finish_clear();
            let message = form.state.error().unwrap_or("failed to register store");
            anyhow::bail!(message.to_string())
        }
    }
}

/// Delete a store.
///
/// # Errors
///
/// Returns an error if the backend refuses the deletion.
pub(crate) async fn run_stores_delete(client: &NplaceClient, id: Uuid) -> anyhow::Result<()> {
    let mut directory = StoreDirectory::new(client.clone());
    let spinner = Spinner::new("Deleting store...");
    match directory.remove(id).await {
        Ok(()) => {
            spinner.finish_success(&format!("deleted store {id}"));
            Ok(())
        }
        Err(e) => {
            spinner.finish_clear();
            anyhow::bail!(e.user_message(DELETE_FAILED))
        }
    }
}

/// Show one store with its tracked keywords.
///
/// # Errors
///
/// Returns an error if the store or its keywords cannot be fetched.
pub(crate) async fn run_stores_show(client: &NplaceClient, id: Uuid) -> anyhow::Result<()> {
    let mut manager = KeywordManager::new(client.clone(), id);
    let spinner = Spinner::new("Loading store...");
    manager.refresh().await;
    spinner.finish_clear();

    if let Some(message) = manager.error {
        anyhow::bail!(message);
    }
    let Some(store) = &manager.store else {
        anyhow::bail!("store {id} not found");
    };

    print!("{}", render::header(None));
    println!("{} ({})", store.name, store.naver_place_id);
    if let Some(category) = &store.category {
        println!("Category: {category}");
    }
    if let Some(address) = &store.address {
        println!("Address: {address}");
    }
    if let Some(url) = &store.naver_place_url {
        println!("URL: {url}");
    }
    println!();
    println!("{}", render::keyword_table(&manager.keywords));
    Ok(())
}

/// Show a store's latest rank per keyword.
///
/// # Errors
///
/// Returns an error if the summary cannot be fetched.
pub(crate) async fn run_stores_summary(client: &NplaceClient, id: Uuid) -> anyhow::Result<()> {
    let spinner = Spinner::new("Loading store summary...");
    let summary = client.store_summary(id).await;
    spinner.finish_clear();

    let summary =
        summary.map_err(|e| anyhow::anyhow!(e.user_message("failed to load store summary")))?;
    print!("{}", render::header(None));
    println!("{}", render::store_summary_table(&summary, &Local));
    if summary.keywords.iter().any(|k| k.latest_rank.is_none()) {
        progress::warning("some keywords have not been collected yet");
    }
    Ok(())
}
