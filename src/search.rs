//! Menu search and category filters

use std::str::FromStr;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::products::{Category, Product, UnknownCategory};

/// Case-fold `text` and strip its diacritics.
///
/// `"Pão de Açúcar"` folds to `"pao de acucar"`.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Category tab selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every product
    #[default]
    All,

    /// Only products tagged with the category
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product with `category` passes the filter.
    pub fn matches(self, category: Option<Category>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category == Some(wanted),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        value.parse().map(Self::Only)
    }
}

/// Free text query plus category selection over a loaded product list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    query: String,
    category: CategoryFilter,
}

impl ProductFilter {
    /// Build a filter. The query is trimmed and folded once up front.
    pub fn new(query: &str, category: CategoryFilter) -> Self {
        Self {
            query: fold(query.trim()),
            category,
        }
    }

    /// Whether `product` passes both the text query and the category.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product.category) && self.matches_text(product)
    }

    /// Filtered view of `products`, in their original order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .collect()
    }

    fn matches_text(&self, product: &Product) -> bool {
        self.query.is_empty()
            || fold(&product.name).contains(&self.query)
            || fold(&product.description).contains(&self.query)
    }
}
