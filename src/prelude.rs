//! Cardápio prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    drafts::{DraftError, EditedFields, NewProduct, ProductDraft, ProductPatch, RequiredField},
    images::{ImageEncoding, ImageRef, normalize_for_upload},
    ordering::{DEFAULT_ORDER_PHONE, order_link},
    prices::{PriceError, format_price, normalize_price_input, parse_price},
    products::{Category, Price, Product, ProductId, products_from_body},
    search::{CategoryFilter, ProductFilter, fold},
};
