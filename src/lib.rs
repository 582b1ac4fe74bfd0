//! Cardápio
//!
//! Domain model of the restaurant storefront: products as the storefront API
//! returns them, menu search and category filters, image upload encoding,
//! price handling, `WhatsApp` order links and the validation and diffing
//! behind the admin forms.

pub mod drafts;
pub mod images;
pub mod ordering;
pub mod prelude;
pub mod prices;
pub mod products;
pub mod search;
