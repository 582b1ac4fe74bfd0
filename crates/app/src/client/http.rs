//! HTTP implementation of [`ProductsApi`].

use async_trait::async_trait;
use cardapio::{
    drafts::{NewProduct, ProductPatch, RequiredField},
    images::{ImageEncoding, normalize_for_upload},
    prices::normalize_price_input,
    products::{Product, ProductId, products_from_body},
};
use serde_json::{Map, Value, json};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::client::{
    ApiRequest, ApiResponse, ClientError, MutationOutcome, ProductsApi, ReqwestTransport,
    Transport,
};

const LIST_PATH: &str = "/getproducts";
const CREATE_PATH: &str = "/postproducts";
const UPDATE_PATH: &str = "/updatepartsofproducts";
const DELETE_PATH: &str = "/deleteproducts";

/// Products client speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProductsClient<T = ReqwestTransport> {
    transport: T,
    image_encoding: ImageEncoding,
}

impl<T: Transport> HttpProductsClient<T> {
    /// Create a client sending images under `image_encoding`.
    #[must_use]
    pub fn new(transport: T, image_encoding: ImageEncoding) -> Self {
        Self {
            transport,
            image_encoding,
        }
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            return Err(ClientError::Http {
                status: response.status,
                body: non_empty(response.body),
            });
        }

        Ok(response)
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        let response = self.send(ApiRequest::get(LIST_PATH)).await?;

        products_from_body(&response.body).map_err(ClientError::Parse)
    }
}

#[async_trait]
impl<T: Transport> ProductsApi for HttpProductsClient<T> {
    #[tracing::instrument(name = "products.list", skip_all)]
    async fn list_products(
        &self,
        cancel: Option<CancellationToken>,
    ) -> Result<Vec<Product>, ClientError> {
        let result = match cancel {
            Some(cancel) => tokio::select! {
                biased;
                () = cancel.cancelled() => Err(ClientError::Cancelled),
                result = self.fetch_products() => result,
            },
            None => self.fetch_products().await,
        };

        match &result {
            Ok(products) => debug!(count = products.len(), "loaded products"),
            Err(ClientError::Cancelled) => debug!("product list request cancelled"),
            Err(error) => warn!(%error, "failed to load products"),
        }

        result
    }

    #[tracing::instrument(name = "products.create", skip_all, fields(name = %product.name), err)]
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<MutationOutcome<Product>, ClientError> {
        product.check()?;

        let description = product.description.trim();

        let body = json!({
            "name": product.name.trim(),
            "description": description,
            "desc": description,
            "price": normalize_price_input(product.price.trim()),
            "imgUrl": normalize_for_upload(&product.image, self.image_encoding),
        });

        let response = self.send(ApiRequest::post(CREATE_PATH, body)).await?;

        let outcome = interpret(response, |body| {
            serde_json::from_str::<Value>(body)
                .ok()
                .and_then(Product::from_value)
        });

        info!(parsed = matches!(outcome, MutationOutcome::Parsed(_)), "created product");

        Ok(outcome)
    }

    #[tracing::instrument(
        name = "products.update",
        skip_all,
        fields(product_id = %patch.id, fields = ?patch.changed_fields()),
        err
    )]
    async fn update_product_partial(
        &self,
        patch: ProductPatch,
    ) -> Result<MutationOutcome<Map<String, Value>>, ClientError> {
        if patch.id.is_blank() {
            return Err(RequiredField::Id.into());
        }

        let mut body = Map::new();

        body.insert("id".to_string(), Value::String(patch.id.canonical()));

        if let Some(name) = &patch.name {
            body.insert("name".to_string(), json!(name.trim()));
        }

        if let Some(description) = &patch.description {
            let description = description.trim();

            body.insert("description".to_string(), json!(description));
            body.insert("desc".to_string(), json!(description));
        }

        if let Some(price) = &patch.price {
            body.insert("price".to_string(), json!(price.trim()));
        }

        if let Some(image) = &patch.image {
            body.insert(
                "imgUrl".to_string(),
                json!(normalize_for_upload(image, self.image_encoding)),
            );
        }

        let response = self
            .send(ApiRequest::put(UPDATE_PATH, Value::Object(body)))
            .await?;

        let outcome = interpret(response, |body| match serde_json::from_str(body) {
            Ok(Value::Object(object)) => Some(object),
            _ => None,
        });

        info!(product_id = %patch.id, "updated product");

        Ok(outcome)
    }

    #[tracing::instrument(name = "products.delete", skip_all, fields(product_id = %id), err)]
    async fn delete_product(&self, id: ProductId) -> Result<bool, ClientError> {
        if id.is_blank() {
            return Err(RequiredField::Id.into());
        }

        self.send(ApiRequest::delete(DELETE_PATH).with_query("id", id.canonical()))
            .await?;

        info!(product_id = %id, "deleted product");

        Ok(true)
    }
}

/// Decide between a parsed body and a bare acknowledgement.
///
/// Only bodies labelled as JSON are parsed; anything that fails to parse is
/// handed back as raw text.
fn interpret<T>(
    response: ApiResponse,
    parse: impl FnOnce(&str) -> Option<T>,
) -> MutationOutcome<T> {
    if response.body.is_empty() {
        return MutationOutcome::Acknowledged { raw: None };
    }

    if response.is_json() {
        if let Some(parsed) = parse(&response.body) {
            return MutationOutcome::Parsed(parsed);
        }
    }

    MutationOutcome::Acknowledged {
        raw: Some(response.body),
    }
}

fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}
