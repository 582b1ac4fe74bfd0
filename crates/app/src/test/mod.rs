//! Test fakes

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use cardapio::{
    drafts::{NewProduct, ProductPatch},
    products::{Price, Product, ProductId},
};
use serde_json::{Map, Value};
use testresult::TestResult;
use tokio::sync::{Notify, oneshot};
use tokio_util::sync::CancellationToken;

use crate::client::{ClientError, MutationOutcome, ProductsApi};

type ListResult = Result<Vec<Product>, ClientError>;

pub(crate) fn product(id: i64, name: &str) -> Product {
    Product {
        id: Some(ProductId::from(id)),
        name: name.to_string(),
        description: format!("{name} da casa"),
        price: Price::from(10),
        ..Product::default()
    }
}

/// Held list response, released by [`Gate::open`].
pub(crate) struct Gate(oneshot::Sender<ListResult>);

impl Gate {
    pub(crate) fn open(self, result: ListResult) -> TestResult {
        self.0.send(result).map_err(|_result| "list call already gone")?;

        Ok(())
    }
}

/// Products API whose list calls wait for a gate opened by the test.
///
/// Gates are handed to list calls in the order they were pushed. Mutations
/// succeed unless a delete failure was queued.
#[derive(Default)]
pub(crate) struct GatedApi {
    gates: Mutex<VecDeque<oneshot::Receiver<ListResult>>>,
    delete_failure: Mutex<Option<ClientError>>,
    cancelled: Notify,
}

impl GatedApi {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn push_gate(&self) -> Gate {
        let (sender, receiver) = oneshot::channel();

        if let Ok(mut gates) = self.gates.lock() {
            gates.push_back(receiver);
        }

        Gate(sender)
    }

    /// Make the next delete fail with `error`.
    pub(crate) fn fail_next_delete(&self, error: ClientError) {
        if let Ok(mut failure) = self.delete_failure.lock() {
            *failure = Some(error);
        }
    }

    /// Resolves once a list call has observed its cancellation.
    pub(crate) async fn wait_for_cancellation(&self) {
        self.cancelled.notified().await;
    }
}

#[async_trait]
impl ProductsApi for GatedApi {
    async fn list_products(&self, cancel: Option<CancellationToken>) -> ListResult {
        let gate = self
            .gates
            .lock()
            .ok()
            .and_then(|mut gates| gates.pop_front());
        let cancel = cancel.unwrap_or_default();

        let Some(gate) = gate else {
            return Ok(Vec::new());
        };

        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                self.cancelled.notify_one();
                Err(ClientError::Cancelled)
            }
            result = gate => result.unwrap_or(Err(ClientError::Cancelled)),
        }
    }

    async fn create_product(
        &self,
        _product: NewProduct,
    ) -> Result<MutationOutcome<Product>, ClientError> {
        Ok(MutationOutcome::Acknowledged { raw: None })
    }

    async fn update_product_partial(
        &self,
        _patch: ProductPatch,
    ) -> Result<MutationOutcome<Map<String, Value>>, ClientError> {
        Ok(MutationOutcome::Acknowledged { raw: None })
    }

    async fn delete_product(&self, _id: ProductId) -> Result<bool, ClientError> {
        let failure = self
            .delete_failure
            .lock()
            .ok()
            .and_then(|mut failure| failure.take());

        failure.map_or(Ok(true), Err)
    }
}
