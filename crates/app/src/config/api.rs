//! Products API Config

use std::{sync::Arc, time::Duration};

use cardapio::{images::ImageEncoding, ordering::DEFAULT_ORDER_PHONE};
use clap::Args;

use crate::client::{HttpProductsClient, ProductsApi, ReqwestTransport, TransportError};

/// Default products API root.
pub const DEFAULT_API_URL: &str = "https://productapi.shardweb.app";

/// How images are sent on create and update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ImageEncodingArg {
    /// Full `data:` URL
    DataUrl,

    /// Base64 payload only
    #[default]
    Raw,
}

impl From<ImageEncodingArg> for ImageEncoding {
    fn from(value: ImageEncodingArg) -> Self {
        match value {
            ImageEncodingArg::DataUrl => Self::DataUrl,
            ImageEncodingArg::Raw => Self::RawBase64,
        }
    }
}

/// Products API settings.
#[derive(Debug, Args)]
pub struct ApiConfig {
    /// Products API base URL
    #[arg(long, global = true, env = "API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Image encoding sent to the API (data-url, raw)
    #[arg(
        long,
        global = true,
        env = "IMAGE_ENCODING",
        value_enum,
        default_value_t = ImageEncodingArg::Raw
    )]
    pub image_encoding: ImageEncodingArg,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "REQUEST_TIMEOUT_SECONDS", default_value_t = 15_u64)]
    pub request_timeout_seconds: u64,

    /// Phone number that receives menu orders over `WhatsApp`
    #[arg(long, global = true, env = "WHATSAPP_PHONE", default_value = DEFAULT_ORDER_PHONE)]
    pub whatsapp_phone: String,
}

impl ApiConfig {
    /// Build the products client described by these settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn connect(&self) -> Result<Arc<dyn ProductsApi>, TransportError> {
        let transport = ReqwestTransport::new(
            &self.api_url,
            Duration::from_secs(self.request_timeout_seconds),
        )?;

        Ok(Arc::new(HttpProductsClient::new(
            transport,
            self.image_encoding.into(),
        )))
    }
}
