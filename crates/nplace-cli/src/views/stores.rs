//! Store directory: the registered stores and the registration form.

use nplace_client::{ClientError, NplaceClient};
use nplace_core::Store;
use uuid::Uuid;

use super::SubmitState;

pub(crate) const LOAD_FAILED: &str = "failed to load stores";
pub(crate) const REGISTER_FAILED: &str = "failed to register store";
pub(crate) const DELETE_FAILED: &str = "failed to delete store";

/// Locally held copy of the store list. Mutations are applied only after the
/// backend confirms them.
pub struct StoreDirectory {
    client: NplaceClient,
    pub stores: Vec<Store>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StoreDirectory {
    #[must_use]
    pub fn new(client: NplaceClient) -> Self {
        Self {
            client,
            stores: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Reloads the list. On failure the previous list is kept and the
    /// message is placed in [`StoreDirectory::error`].
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;
        match self.client.list_stores().await {
            Ok(stores) => self.stores = stores,
            Err(e) => {
                tracing::warn!(error = %e, "store list fetch failed");
                self.error = Some(e.user_message(LOAD_FAILED));
            }
        }
        self.loading = false;
    }

    /// Registers a store and appends it to the local list.
    ///
    /// # Errors
    ///
    /// Propagates the [`ClientError`] so the form can show it; the list is
    /// left unchanged.
    pub async fn register(&mut self, naver_place_id: &str) -> Result<Store, ClientError> {
        self.error = None;
        let store = self.client.create_store(naver_place_id).await?;
        tracing::info!(store_id = %store.id, place_id = %store.naver_place_id, "store registered");
        self.stores.push(store.clone());
        Ok(store)
    }

    /// Deletes a store, removing it locally only once the backend agrees.
    ///
    /// # Errors
    ///
    /// Propagates the [`ClientError`]; the list is left unchanged.
    pub async fn remove(&mut self, store_id: Uuid) -> Result<(), ClientError> {
        self.client.delete_store(store_id).await?;
        self.stores.retain(|s| s.id != store_id);
        tracing::info!(%store_id, "store deleted");
        Ok(())
    }
}

/// Registration form: the place-id input and its submit state.
#[derive(Debug, Default)]
pub struct RegisterForm {
    pub place_id: String,
    pub state: SubmitState,
}

impl RegisterForm {
    #[must_use]
    pub fn new(place_id: impl Into<String>) -> Self {
        Self {
            place_id: place_id.into(),
            state: SubmitState::Idle,
        }
    }

    /// Submits the form. Blank input or a submit already in flight is a
    /// no-op returning `None`. On success the input is cleared; on failure
    /// the message stays in [`RegisterForm::state`].
    pub async fn submit(&mut self, directory: &mut StoreDirectory) -> Option<Store> {
        if self.place_id.trim().is_empty() || !self.state.begin() {
            return None;
        }
        let result = directory.register(&self.place_id).await;
        self.state.finish(&result, REGISTER_FAILED);
        match result {
            Ok(store) => {
                self.place_id.clear();
                Some(store)
            }
            Err(e) => {
                tracing::warn!(error = %e, "store registration failed");
                None
            }
        }
    }
}
