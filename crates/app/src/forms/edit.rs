//! Edit product form

use std::{borrow::Cow, path::Path, sync::Arc};

use cardapio::{
    drafts::{EditedFields, ProductPatch},
    images::renderable_or_fallback,
    products::{Product, ProductId},
};
use tracing::{info, warn};

use crate::{
    client::ProductsApi,
    forms::notice::{self, Notice},
    listing::ListSnapshot,
    uploads::load_image,
};

const NOTHING_TO_UPDATE: &str = "Nada para atualizar.";
const UPDATED: &str = "Produto atualizado com sucesso!";

/// What the edit screen can show for a requested id.
pub enum EditView {
    /// No id was given.
    MissingId,

    /// The list is still loading and the product is not known yet.
    Loading,

    /// The list failed to load.
    LoadFailed(String),

    /// The loaded list has no product with that id.
    NotFound,

    /// The product was found and can be edited.
    Ready(Box<EditProductForm>),
}

impl EditView {
    /// Locate the product `id` in the loaded list and open a form for it.
    ///
    /// Guards are checked in order: missing id, still loading, load error,
    /// not found.
    pub fn open(api: Arc<dyn ProductsApi>, list: &ListSnapshot, id: Option<&str>) -> Self {
        let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
            return Self::MissingId;
        };

        let current = list.find(id);

        if list.loading && current.is_none() {
            return Self::Loading;
        }

        if let Some(error) = &list.error {
            return Self::LoadFailed(error.clone());
        }

        match current {
            Some(product) => Self::Ready(Box::new(EditProductForm::new(api, product.clone()))),
            None => Self::NotFound,
        }
    }

    /// User facing text for the guard states.
    pub fn guard_message(&self) -> Option<Cow<'_, str>> {
        let message = match self {
            Self::MissingId => Cow::Borrowed("ID inválido."),
            Self::Loading => Cow::Borrowed("Carregando…"),
            Self::LoadFailed(error) => Cow::Owned(format!("Erro: {error}")),
            Self::NotFound => Cow::Borrowed("Produto não encontrado."),
            Self::Ready(_) => return None,
        };

        Some(message)
    }
}

/// Field values and submit state of the edit screen.
pub struct EditProductForm {
    api: Arc<dyn ProductsApi>,
    baseline: Product,
    fields: EditedFields,
    picked_image: Option<String>,
    notice: Option<Notice>,
}

impl EditProductForm {
    fn new(api: Arc<dyn ProductsApi>, baseline: Product) -> Self {
        Self {
            api,
            fields: EditedFields::from_product(&baseline),
            baseline,
            picked_image: None,
            notice: None,
        }
    }

    /// Product as last loaded or saved.
    pub fn baseline(&self) -> &Product {
        &self.baseline
    }

    pub fn fields(&self) -> &EditedFields {
        &self.fields
    }

    pub fn notice(&self) -> Option<&Notice> {
        notice::visible(self.notice.as_ref())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.fields.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.fields.description = description.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.fields.price = price.into();
    }

    /// Replace or, with `None`, drop the newly picked image.
    pub fn set_image(&mut self, data_url: Option<String>) {
        self.picked_image = data_url;
    }

    /// Read a local file as the new image.
    pub async fn pick_image(&mut self, path: &Path) -> bool {
        match load_image(path).await {
            Ok(data_url) => {
                self.picked_image = Some(data_url);
                true
            }
            Err(error) => {
                self.notice = Some(Notice::error(error.to_string()));
                false
            }
        }
    }

    /// Image to display: the picked one, else the stored one, else the
    /// placeholder.
    pub fn preview(&self) -> Cow<'_, str> {
        match &self.picked_image {
            Some(picked) => Cow::Borrowed(picked.as_str()),
            None => renderable_or_fallback(self.baseline.img_url.as_deref()),
        }
    }

    /// Partial update for the current edits.
    pub fn patch(&self) -> ProductPatch {
        let id = self
            .baseline
            .id
            .clone()
            .unwrap_or_else(|| ProductId::from(""));

        ProductPatch::diff(id, &self.baseline, &self.fields, self.picked_image.as_deref())
    }

    /// Send the changed fields.
    ///
    /// Nothing is sent when nothing changed. After a successful update the
    /// edits become the new baseline.
    #[tracing::instrument(name = "forms.edit", skip_all, fields(product_id = ?self.baseline.id))]
    pub async fn submit(&mut self) -> bool {
        self.notice = None;

        let patch = self.patch();

        if patch.is_empty() {
            self.notice = Some(Notice::info(NOTHING_TO_UPDATE));
            return false;
        }

        match self.api.update_product_partial(patch.clone()).await {
            Ok(_) => {
                info!(fields = ?patch.changed_fields(), "product updated");
                self.apply(patch);
                self.notice = Some(Notice::success(UPDATED));
                true
            }
            Err(error) => {
                warn!(%error, "product update failed");
                self.notice = Some(Notice::error(error.to_string()));
                false
            }
        }
    }

    fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.baseline.name = name;
        }

        if let Some(description) = patch.description {
            self.baseline.description = description;
        }

        if let Some(price) = patch.price {
            self.baseline.price = price.as_str().into();
        }

        if let Some(image) = patch.image {
            self.baseline.img_url = Some(image);
        }

        self.picked_image = None;
        self.fields = EditedFields::from_product(&self.baseline);
    }
}
