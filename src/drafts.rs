//! Product drafts
//!
//! Validation of the create form and the field diff behind partial updates.

use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    prices::{normalize_price_input, parse_price},
    products::{Product, ProductId},
};

/// Draft values held by the create form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    /// Typed name
    pub name: String,

    /// Typed description
    pub description: String,

    /// Typed price, comma or dot as decimal separator
    pub price: String,

    /// Selected image as a data URL
    pub image: Option<String>,
}

/// Inline errors of the create form, in validation order.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DraftError {
    /// Name is blank.
    #[error("O nome é obrigatório.")]
    MissingName,

    /// Description is blank.
    #[error("A descrição é obrigatória.")]
    MissingDescription,

    /// Price is blank or not a number.
    #[error("Informe um preço válido (ex.: 25.99).")]
    InvalidPrice,

    /// No image was selected.
    #[error("Selecione uma imagem.")]
    MissingImage,
}

impl ProductDraft {
    /// Validate the draft into a create payload.
    ///
    /// The first failing check wins: name, description, price, image.
    ///
    /// # Errors
    ///
    /// Returns the [`DraftError`] for the first invalid field.
    pub fn validate(&self) -> Result<NewProduct, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(DraftError::MissingDescription);
        }

        let price = normalize_price_input(self.price.trim());
        parse_price(&price).map_err(|_err| DraftError::InvalidPrice)?;

        let image = self
            .image
            .as_deref()
            .filter(|image| !image.is_empty())
            .ok_or(DraftError::MissingImage)?;

        Ok(NewProduct {
            name: name.to_string(),
            description: description.to_string(),
            price,
            image: image.to_string(),
        })
    }
}

/// Required field missing from a mutation payload.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RequiredField {
    /// Product name
    #[error("Nome é obrigatório.")]
    Name,

    /// Product description
    #[error("Descrição é obrigatória.")]
    Description,

    /// Product price, missing or not a number
    #[error("Preço é obrigatório.")]
    Price,

    /// Product id of an update or delete
    #[error("O campo 'id' é obrigatório.")]
    Id,
}

/// Create payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProduct {
    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Price as a numeric string
    pub price: String,

    /// Image content, data URL or raw base64
    pub image: String,
}

impl NewProduct {
    /// Check the required fields without touching the network.
    ///
    /// # Errors
    ///
    /// Returns the first [`RequiredField`] that is blank or, for the price,
    /// not a number.
    pub fn check(&self) -> Result<(), RequiredField> {
        if self.name.trim().is_empty() {
            return Err(RequiredField::Name);
        }

        if self.description.trim().is_empty() {
            return Err(RequiredField::Description);
        }

        parse_price(&normalize_price_input(&self.price)).map_err(|_err| RequiredField::Price)?;

        Ok(())
    }
}

/// Field values of the edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditedFields {
    /// Edited name
    pub name: String,

    /// Edited description
    pub description: String,

    /// Edited price
    pub price: String,
}

impl EditedFields {
    /// Start editing from the values of a loaded product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.canonical(),
        }
    }
}

/// Partial update: the id plus only the fields that changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPatch {
    /// Target product
    pub id: ProductId,

    /// New name
    pub name: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New price
    pub price: Option<String>,

    /// New image, data URL or raw base64
    pub image: Option<String>,
}

impl ProductPatch {
    /// A patch that changes nothing yet.
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            name: None,
            description: None,
            price: None,
            image: None,
        }
    }

    /// Diff edited values against the loaded `baseline`.
    ///
    /// Edited values are trimmed and compared with the baseline as loaded, the
    /// price with its canonical string. A baseline carrying stray whitespace
    /// therefore reports its trimmed value as a change. A picked image is
    /// always included.
    pub fn diff(
        id: ProductId,
        baseline: &Product,
        edited: &EditedFields,
        picked_image: Option<&str>,
    ) -> Self {
        let name = edited.name.trim();
        let description = edited.description.trim();
        let price = edited.price.trim();

        Self {
            id,
            name: (name != baseline.name).then(|| name.to_string()),
            description: (description != baseline.description)
                .then(|| description.to_string()),
            price: (price != baseline.price.canonical()).then(|| price.to_string()),
            image: picked_image
                .filter(|image| !image.is_empty())
                .map(str::to_string),
        }
    }

    /// Whether nothing would be sent besides the id.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image.is_none()
    }

    /// Names of the fields carried by the patch.
    pub fn changed_fields(&self) -> SmallVec<[&'static str; 4]> {
        let mut fields = SmallVec::new();

        if self.name.is_some() {
            fields.push("name");
        }
        if self.description.is_some() {
            fields.push("description");
        }
        if self.price.is_some() {
            fields.push("price");
        }
        if self.image.is_some() {
            fields.push("image");
        }

        fields
    }
}
