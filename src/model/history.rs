//! Package history entries and the initial-quantity parser
//!
//! The history endpoint describes package events as free-text lines like
//! `Packaged 12.5 Grams of OG Kush Shake`. The initial packaged quantity
//! and unit are only available by parsing that text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static PACKAGED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Packaged ([0-9,.]+) ([a-zA-Z\s]+) of").expect("valid regex"));
static PLANT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Packaged ([0-9,.]+) plant").expect("valid regex"));
static REPACKAGED_PLANT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Repackaged ([0-9,.]+) plant").expect("valid regex"));

/// One entry from `GET /v2/packages/history`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageHistoryEntry {
    /// Free-text event descriptions
    #[serde(default)]
    pub descriptions: Vec<String>,
    /// Date the event took effect
    #[serde(default)]
    pub actual_date: Option<String>,
}

/// Initial packaged quantity extracted from a history description
#[derive(Debug, Clone, PartialEq)]
pub struct InitialQuantity {
    /// Quantity as packaged
    pub quantity: f64,
    /// Unit of measure; plant counts report as `Each`
    pub unit: String,
}

impl InitialQuantity {
    /// Extracts the initial package quantity and unit from a description
    ///
    /// Recognizes `Packaged <n> <unit> of ...`, `Packaged <n> plant...` and
    /// `Repackaged <n> plant...`; returns `None` for anything else.
    #[must_use]
    pub fn parse(description: &str) -> Option<Self> {
        if let Some(captures) = PACKAGED_RE.captures(description) {
            return Some(Self {
                quantity: parse_number(&captures[1])?,
                unit: captures[2].trim().to_string(),
            });
        }

        for re in [&*PLANT_RE, &*REPACKAGED_PLANT_RE] {
            if let Some(captures) = re.captures(description) {
                return Some(Self {
                    quantity: parse_number(&captures[1])?,
                    unit: "Each".to_string(),
                });
            }
        }

        None
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_weight_description() {
        let parsed = InitialQuantity::parse("Packaged 12.5 Grams of OG Kush Shake").unwrap();
        assert_eq!(parsed.quantity, 12.5);
        assert_eq!(parsed.unit, "Grams");
    }

    #[test]
    fn parses_quantity_with_thousands_separator() {
        let parsed = InitialQuantity::parse("Packaged 1,250 Grams of Trim").unwrap();
        assert_eq!(parsed.quantity, 1250.0);
        assert_eq!(parsed.unit, "Grams");
    }

    #[test]
    fn parses_multi_word_unit() {
        let parsed = InitialQuantity::parse("Packaged 4 Fluid Ounces of Tincture").unwrap();
        assert_eq!(parsed.quantity, 4.0);
        assert_eq!(parsed.unit, "Fluid Ounces");
    }

    #[test]
    fn plant_counts_report_as_each() {
        let parsed = InitialQuantity::parse("Packaged 4 plants").unwrap();
        assert_eq!(parsed.quantity, 4.0);
        assert_eq!(parsed.unit, "Each");

        let reparsed = InitialQuantity::parse("Repackaged 2 plants").unwrap();
        assert_eq!(reparsed.quantity, 2.0);
        assert_eq!(reparsed.unit, "Each");
    }

    #[test]
    fn unrelated_descriptions_return_none() {
        assert!(InitialQuantity::parse("Used 5 Grams for testing").is_none());
        assert!(InitialQuantity::parse("").is_none());
    }
}
