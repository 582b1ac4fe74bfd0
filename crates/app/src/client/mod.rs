//! Products client
//!
//! The only boundary between the storefront and the remote products API.

use async_trait::async_trait;
use cardapio::{
    drafts::{NewProduct, ProductPatch},
    products::{Product, ProductId},
};
use mockall::automock;
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;

pub mod errors;
mod http;
pub mod transport;

pub use errors::{ClientError, TransportError};
pub use http::HttpProductsClient;
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};

/// Result of a create or update call.
///
/// The API does not always answer with JSON: a plain text or empty body on a
/// 2xx status still means the mutation went through.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<T> {
    /// The server returned a parseable JSON body.
    Parsed(T),

    /// The server confirmed without a structured body.
    Acknowledged { raw: Option<String> },
}

#[automock]
#[async_trait]
pub trait ProductsApi: Send + Sync {
    /// Fetch every product. Cancelling `cancel` ends the call with
    /// [`ClientError::Cancelled`].
    async fn list_products(
        &self,
        cancel: Option<CancellationToken>,
    ) -> Result<Vec<Product>, ClientError>;

    /// Create a product.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<MutationOutcome<Product>, ClientError>;

    /// Send only the fields carried by `patch`.
    async fn update_product_partial(
        &self,
        patch: ProductPatch,
    ) -> Result<MutationOutcome<Map<String, Value>>, ClientError>;

    /// Delete a product. Any 2xx answer counts as deleted.
    async fn delete_product(&self, id: ProductId) -> Result<bool, ClientError>;
}
