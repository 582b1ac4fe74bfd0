//! Form controllers
//!
//! Draft state and submit logic behind the create and edit screens. Every
//! outcome ends up as a [`Notice`]; submit never returns an error.

pub use create::CreateProductForm;
pub use edit::{EditProductForm, EditView};
pub use notice::{Notice, NoticeKind};

mod create;
mod edit;
mod notice;
