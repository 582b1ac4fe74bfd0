//! Product list state
//!
//! Loads the product list when mounted and publishes every change through a
//! [`watch`] channel. Tearing the state down cancels the in-flight load and
//! publishes one last snapshot with `loading` cleared; nothing is published
//! after that.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use cardapio::products::{Product, ProductId};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::{ClientError, ProductsApi};

/// Observable state of a product list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSnapshot {
    /// Last successfully loaded products
    pub items: Vec<Product>,

    /// Whether a load is in flight
    pub loading: bool,

    /// Message of the last failed load
    pub error: Option<String>,
}

impl ListSnapshot {
    /// The loaded product addressed by the raw id `raw`.
    pub fn find(&self, raw: &str) -> Option<&Product> {
        self.items.iter().find(|product| product.has_id(raw))
    }
}

/// Product list owned by one view.
pub struct ProductListState {
    api: Arc<dyn ProductsApi>,
    state: Arc<watch::Sender<ListSnapshot>>,
    latest: Arc<AtomicU64>,
    cancel: CancellationToken,
}

impl ProductListState {
    /// Create the state and start the initial load.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(api: Arc<dyn ProductsApi>) -> Self {
        let (state, _) = watch::channel(ListSnapshot::default());

        let list = Self {
            api,
            state: Arc::new(state),
            latest: Arc::new(AtomicU64::new(0)),
            cancel: CancellationToken::new(),
        };

        list.refresh();

        list
    }

    /// Load the list again.
    ///
    /// When loads overlap, only the most recently started one is allowed to
    /// publish its result.
    pub fn refresh(&self) {
        if self.cancel.is_cancelled() {
            return;
        }

        let request = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        self.state.send_modify(|snapshot| {
            snapshot.loading = true;
            snapshot.error = None;
        });

        tokio::spawn(load(
            Arc::clone(&self.api),
            Arc::clone(&self.state),
            Arc::clone(&self.latest),
            request,
            self.cancel.child_token(),
        ));
    }

    /// Cancel any in-flight load and stop publishing.
    ///
    /// The final snapshot keeps its items and error, with `loading` cleared.
    pub fn teardown(&self) {
        if self.cancel.is_cancelled() {
            return;
        }

        self.state.send_if_modified(|snapshot| {
            let was_loading = snapshot.loading;
            snapshot.loading = false;
            was_loading
        });

        self.cancel.cancel();
    }

    /// Whether [`teardown`](Self::teardown) has run.
    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<ListSnapshot> {
        self.state.subscribe()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> ListSnapshot {
        self.state.borrow().clone()
    }

    /// Wait until no load is in flight and return the snapshot.
    ///
    /// Returns the current snapshot straight away once torn down.
    pub async fn settled(&self) -> ListSnapshot {
        let mut receiver = self.state.subscribe();

        tokio::select! {
            () = self.cancel.cancelled() => {}
            _ = receiver.wait_for(|snapshot| !snapshot.loading) => {}
        }

        self.snapshot()
    }

    /// Evict a product from the loaded items without reloading.
    pub fn remove(&self, id: &ProductId) {
        if self.cancel.is_cancelled() {
            return;
        }

        let raw = id.canonical();

        self.state.send_if_modified(|snapshot| {
            let before = snapshot.items.len();
            snapshot.items.retain(|product| !product.has_id(&raw));
            snapshot.items.len() != before
        });
    }

    /// Delete a product remotely and evict it locally on success.
    ///
    /// # Errors
    ///
    /// Returns the client error; the loaded items are left untouched.
    pub async fn delete(&self, id: ProductId) -> Result<bool, ClientError> {
        let deleted = self.api.delete_product(id.clone()).await?;

        if deleted {
            self.remove(&id);
        }

        Ok(deleted)
    }
}

impl Drop for ProductListState {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn load(
    api: Arc<dyn ProductsApi>,
    state: Arc<watch::Sender<ListSnapshot>>,
    latest: Arc<AtomicU64>,
    request: u64,
    cancel: CancellationToken,
) {
    let result = api.list_products(Some(cancel.clone())).await;

    if cancel.is_cancelled() {
        debug!(request, "list state torn down, dropping load result");
        return;
    }

    if latest.load(Ordering::SeqCst) != request {
        debug!(request, "superseded load result discarded");
        return;
    }

    state.send_modify(|snapshot| {
        snapshot.loading = false;

        match result {
            Ok(items) => {
                snapshot.items = items;
                snapshot.error = None;
            }
            Err(ClientError::Cancelled) => {}
            Err(error) => snapshot.error = Some(error.to_string()),
        }
    });
}
