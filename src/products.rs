//! Products

use std::{
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;

use crate::{
    images::ImageRef,
    prices::{normalize_price_input, parse_price},
};

/// Product identifier.
///
/// The storefront API hands ids back either as JSON numbers or as strings,
/// so both shapes are kept and compared through their canonical string.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Numeric id
    Number(i64),

    /// String id
    Text(String),
}

impl ProductId {
    /// Canonical string form, used for every comparison and for query strings.
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    /// Whether this id targets the product addressed by `raw`.
    pub fn matches(&self, raw: &str) -> bool {
        self.canonical() == raw.trim()
    }

    /// Whether the id carries no usable value.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}

impl PartialEq for ProductId {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Hash for ProductId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => Display::fmt(number, f),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Product price, either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    /// Numeric price
    Number(Number),

    /// Textual price, as typed into the admin forms
    Text(String),
}

impl Price {
    /// Stringified form used when diffing edits against a loaded product.
    ///
    /// Integral floating point values drop their fractional part, so a
    /// price of `12.0` and a typed `"12"` compare equal.
    pub fn canonical(&self) -> String {
        match self {
            Self::Number(number) => canonical_number(number),
            Self::Text(text) => text.clone(),
        }
    }

    /// Numeric amount, when the price is a number or a numeric-like string.
    pub fn amount(&self) -> Option<Decimal> {
        parse_price(&normalize_price_input(&self.canonical())).ok()
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

fn canonical_number(number: &Number) -> String {
    if number.is_f64() {
        if let Some(value) = number.as_f64() {
            if value.fract().abs() < f64::EPSILON && value.abs() < 1e15 {
                return format!("{value:.0}");
            }
        }
    }

    number.to_string()
}

/// Menu category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Pizzas
    Pizza,

    /// Burgers
    Burger,

    /// Drinks
    Drink,

    /// Snacks and sides
    Snack,
}

impl Category {
    /// Every category, in menu tab order.
    pub const ALL: [Self; 4] = [Self::Pizza, Self::Burger, Self::Drink, Self::Snack];

    /// Wire name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pizza => "pizza",
            Self::Burger => "burger",
            Self::Drink => "drink",
            Self::Snack => "snack",
        }
    }

    /// Menu tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pizza => "Pizza",
            Self::Burger => "Burger",
            Self::Drink => "Bebidas",
            Self::Snack => "Batata",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

/// Product
///
/// Deserialisation is lenient: the API may send the description as `desc`,
/// omit fields or use unexpected types, and a single odd record should not
/// take the whole menu down with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawProduct")]
pub struct Product {
    /// Server assigned identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,

    /// Display name
    pub name: String,

    /// Free text description
    pub description: String,

    /// Price
    pub price: Price,

    /// Stored image reference (URL, blob, data URL or raw base64)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,

    /// Menu category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Opaque creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Product {
    /// Normalise one element of a list response.
    ///
    /// Returns `None` for elements that are not JSON objects.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }

        serde_json::from_value(value).ok()
    }

    /// Classified image reference, if the product has one.
    pub fn image(&self) -> Option<ImageRef<'_>> {
        self.img_url.as_deref().and_then(ImageRef::classify)
    }

    /// Whether the product is addressed by the raw id `raw`.
    pub fn has_id(&self, raw: &str) -> bool {
        self.id.as_ref().is_some_and(|id| id.matches(raw))
    }
}

/// Parse a list response body into products.
///
/// A body that is valid JSON but not an array yields an empty list.
///
/// # Errors
///
/// Returns an error when the body is not valid JSON.
pub fn products_from_body(body: &str) -> Result<Vec<Product>, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;

    let Value::Array(elements) = value else {
        return Ok(Vec::new());
    };

    Ok(elements.into_iter().filter_map(Product::from_value).collect())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProduct {
    #[serde(default, deserialize_with = "lenient_id")]
    id: Option<ProductId>,

    #[serde(default, deserialize_with = "lenient_text")]
    name: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    description: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    desc: Option<String>,

    #[serde(default, deserialize_with = "lenient_price")]
    price: Price,

    #[serde(default, deserialize_with = "lenient_text")]
    img_url: Option<String>,

    #[serde(default, deserialize_with = "lenient_category")]
    category: Option<Category>,

    #[serde(default, deserialize_with = "lenient_text")]
    created_at: Option<String>,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        Self {
            id: raw.id,
            name: raw.name.unwrap_or_default(),
            description: raw.description.or(raw.desc).unwrap_or_default(),
            price: raw.price,
            img_url: raw.img_url,
            category: raw.category,
            created_at: raw.created_at,
        }
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<ProductId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => Some(
            number
                .as_i64()
                .map_or_else(|| ProductId::Text(number.to_string()), ProductId::Number),
        ),
        Some(Value::String(text)) => Some(ProductId::Text(text)),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Price, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => Price::Number(number),
        Some(Value::String(text)) => Price::Text(text),
        _ => Price::default(),
    })
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => text.parse().ok(),
        _ => None,
    })
}
