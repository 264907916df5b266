//! Guide Catalog
//!
//! Purchasable guides as listed by the backend. Items pass through the
//! checkout flow unmodified; only `id` is sent back.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable guide
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub tax: Option<Decimal>,
    #[serde(default)]
    pub image: String,
}

impl Guide {
    /// Price plus tax, when the backend included tax
    pub fn total(&self) -> Decimal {
        self.price + self.tax.unwrap_or_default()
    }
}

/// `GET /guides` body
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideList {
    #[serde(default)]
    pub guides: Vec<Guide>,
}

/// `GET /price` body.
///
/// Backends that sell a single guide expose `/price` instead of `/guides`.
/// The bundled web app lists guides and never asks for a quote; this type
/// is kept for library callers built against such a backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub price: Decimal,
    #[serde(default)]
    pub tax: Decimal,
}

impl PriceQuote {
    pub fn total(&self) -> Decimal {
        self.price + self.tax
    }
}

/// Order summary lines shown in the checkout modal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

/// Summary for a single-guide backend, see [`PriceQuote`]
impl From<&PriceQuote> for OrderSummary {
    fn from(quote: &PriceQuote) -> Self {
        Self {
            subtotal: format_usd(quote.price),
            tax: format_usd(quote.tax),
            total: format_usd(quote.total()),
        }
    }
}

impl From<&Guide> for OrderSummary {
    fn from(guide: &Guide) -> Self {
        Self {
            subtotal: format_usd(guide.price),
            tax: format_usd(guide.tax.unwrap_or_default()),
            total: format_usd(guide.total()),
        }
    }
}

/// `$12.30`
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_guide_list_parses_backend_numbers() {
        let body = r#"{"guides":[{"id":"fundamentals",
            "title":"Fundamentals of Mushroom Cultivation",
            "description":"A concise, step-by-step guide","price":30.0,"image":"/mush1.webp"}]}"#;
        let list: GuideList = serde_json::from_str(body).unwrap();
        assert_eq!(list.guides.len(), 1);
        assert_eq!(list.guides[0].price, dec!(30));
        assert_eq!(list.guides[0].tax, None);
    }

    #[test]
    fn test_missing_guides_field_is_empty() {
        let list: GuideList = serde_json::from_str("{}").unwrap();
        assert!(list.guides.is_empty());
    }

    #[test]
    fn test_summary_formatting() {
        let quote = PriceQuote { price: dec!(30), tax: dec!(2.175) };
        let summary = OrderSummary::from(&quote);
        assert_eq!(summary.subtotal, "$30.00");
        assert_eq!(summary.tax, "$2.18");
        assert_eq!(summary.total, "$32.18");
    }
}
