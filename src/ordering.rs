//! Order links
//!
//! Every menu item can be ordered through a prefilled `WhatsApp` chat.

use url::{ParseError, Url};

use crate::products::Product;

/// Phone number orders go to when none is configured.
pub const DEFAULT_ORDER_PHONE: &str = "5599999999999";

/// `wa.me` link that opens a chat with `phone` prefilled with an order for
/// `product`.
///
/// # Errors
///
/// Returns an error when `phone` does not form a valid URL path.
pub fn order_link(product: &Product, phone: &str) -> Result<Url, ParseError> {
    let message = format!("Olá! Quero {} por {}", product.name, product.price);

    Url::parse_with_params(
        &format!("https://wa.me/{}", phone.trim()),
        [("text", message)],
    )
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::products::Price;

    use super::*;

    #[test]
    fn accented_name_is_query_encoded() -> TestResult {
        let product = Product {
            name: "Pão de Açúcar".to_string(),
            price: Price::from("12.50"),
            ..Product::default()
        };

        let link = order_link(&product, DEFAULT_ORDER_PHONE)?;

        assert_eq!(link.host_str(), Some("wa.me"));
        assert_eq!(link.path(), "/5599999999999");

        let text = link
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned());

        assert_eq!(text.as_deref(), Some("Olá! Quero Pão de Açúcar por 12.50"));
        assert!(
            link.as_str().contains("P%C3%A3o"),
            "name not percent-encoded: {link}"
        );

        Ok(())
    }

    #[test]
    fn numeric_price_uses_its_canonical_form() -> TestResult {
        let product = Product {
            name: "Suco".to_string(),
            price: Price::from(8),
            ..Product::default()
        };

        let link = order_link(&product, " 5531999999999 ")?;

        assert_eq!(link.path(), "/5531999999999");
        assert!(link.query_pairs().any(|(_, value)| value == "Olá! Quero Suco por 8"));

        Ok(())
    }
}
