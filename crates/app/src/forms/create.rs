//! Create product form

use std::{path::Path, sync::Arc};

use cardapio::{drafts::ProductDraft, prices::normalize_price_input};
use tracing::{info, warn};

use crate::{
    client::ProductsApi,
    forms::notice::{self, Notice},
    uploads::load_image,
};

const CREATED: &str = "Produto criado com sucesso!";

/// Draft and submit state of the create screen.
pub struct CreateProductForm {
    api: Arc<dyn ProductsApi>,
    draft: ProductDraft,
    notice: Option<Notice>,
}

impl CreateProductForm {
    pub fn new(api: Arc<dyn ProductsApi>) -> Self {
        Self {
            api,
            draft: ProductDraft::default(),
            notice: None,
        }
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Current message, if any is still visible.
    pub fn notice(&self) -> Option<&Notice> {
        notice::visible(self.notice.as_ref())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Accepts a comma or a dot as decimal separator and keeps the dot.
    pub fn set_price(&mut self, price: &str) {
        self.draft.price = normalize_price_input(price);
    }

    /// Use an already encoded image.
    pub fn set_image(&mut self, data_url: impl Into<String>) {
        self.draft.image = Some(data_url.into());
    }

    /// Read a local file as the product image.
    ///
    /// On failure the previous image is kept and an error notice is raised.
    pub async fn pick_image(&mut self, path: &Path) -> bool {
        match load_image(path).await {
            Ok(data_url) => {
                self.draft.image = Some(data_url);
                true
            }
            Err(error) => {
                self.notice = Some(Notice::error(error.to_string()));
                false
            }
        }
    }

    /// Validate and create the product.
    ///
    /// On success the draft is cleared and a short-lived success notice is
    /// shown. On failure the draft is kept for correction.
    #[tracing::instrument(name = "forms.create", skip_all, fields(name = %self.draft.name))]
    pub async fn submit(&mut self) -> bool {
        self.notice = None;

        let product = match self.draft.validate() {
            Ok(product) => product,
            Err(error) => {
                self.notice = Some(Notice::error(error.to_string()));
                return false;
            }
        };

        match self.api.create_product(product).await {
            Ok(_) => {
                info!("product created");
                self.draft = ProductDraft::default();
                self.notice = Some(Notice::transient_success(CREATED));
                true
            }
            Err(error) => {
                warn!(%error, "product creation failed");
                self.notice = Some(Notice::error(error.to_string()));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use cardapio::drafts::NewProduct;
    use testresult::TestResult;

    use crate::{
        client::{ClientError, MockProductsApi, MutationOutcome},
        forms::{NoticeKind, notice::NOTICE_TTL},
    };

    use super::*;

    fn filled(api: MockProductsApi) -> CreateProductForm {
        let mut form = CreateProductForm::new(Arc::new(api));

        form.set_name("X");
        form.set_description("Y");
        form.set_price("10,50");
        form.set_image("data:image/png;base64,AAAA");

        form
    }

    #[tokio::test(start_paused = true)]
    async fn successful_submit_clears_draft_and_notice_expires() -> TestResult {
        let mut api = MockProductsApi::new();

        api.expect_create_product()
            .once()
            .withf(|product: &NewProduct| product.price == "10.50" && product.name == "X")
            .returning(|_| Ok(MutationOutcome::Acknowledged { raw: None }));

        let mut form = filled(api);

        assert!(form.submit().await);
        assert_eq!(form.draft(), &ProductDraft::default());

        let notice = form.notice().ok_or("missing notice")?;
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, "Produto criado com sucesso!");

        tokio::time::advance(Duration::from_millis(2499)).await;
        assert!(form.notice().is_some());

        tokio::time::advance(NOTICE_TTL).await;
        assert!(form.notice().is_none());

        Ok(())
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_api() -> TestResult {
        let mut api = MockProductsApi::new();
        api.expect_create_product().never();

        let mut form = filled(api);
        form.set_price("abc");

        assert!(!form.submit().await);

        let notice = form.notice().ok_or("missing notice")?;
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Informe um preço válido (ex.: 25.99).");

        Ok(())
    }

    #[tokio::test]
    async fn failed_submit_keeps_draft() -> TestResult {
        let mut api = MockProductsApi::new();

        api.expect_create_product().once().returning(|_| {
            Err(ClientError::Http {
                status: 500,
                body: Some("boom".to_string()),
            })
        });

        let mut form = filled(api);

        assert!(!form.submit().await);
        assert_eq!(form.draft().name, "X");
        assert_eq!(form.draft().price, "10.50");
        assert_eq!(
            form.notice().map(|notice| notice.message.as_str()),
            Some("Erro HTTP 500: boom")
        );

        Ok(())
    }

    #[tokio::test]
    async fn picking_a_non_image_raises_error_notice() {
        let mut form = CreateProductForm::new(Arc::new(MockProductsApi::new()));

        assert!(!form.pick_image(Path::new("cardapio.pdf")).await);
        assert_eq!(form.draft().image, None);
        assert_eq!(form.notice().map(|notice| notice.kind), Some(NoticeKind::Error));
    }
}
