//! # Offering Catalog
//!
//! The fixed list of bond offerings a market presents, plus the brand colour
//! associated with each offering.
//!
//! Every field on [`OfferingRecord`] is display-only. Yields and maturity dates
//! are kept as the strings shown on the page; nothing here does arithmetic on
//! them or parses them.
//!
//! A [`Catalog`] is built once (usually while loading a
//! [`MarketConfig`](crate::market::MarketConfig)) and never mutated afterwards.
//!
//! ## Usage
//!
//! ```rust
//! use shared::catalog::{Catalog, CouponFrequency, OfferingRecord};
//! use shared::Color;
//!
//! let record = OfferingRecord {
//!     name: "UBS".to_string(),
//!     identifier: "USH3698DDW14".to_string(),
//!     credit_rating: "A".to_string(),
//!     coupon_frequency: CouponFrequency::SemiAnnual,
//!     maturity_date: "15/11/2033".to_string(),
//!     yield_label: "9.016%".to_string(),
//!     description: "Swiss precision in fixed income investing.".to_string(),
//!     currency: "GBP".to_string(),
//!     logo_asset_ref: "/ubs-logo.png".to_string(),
//!     minimum_investment: None,
//! };
//!
//! let catalog = Catalog::new(vec![record], [("UBS".to_string(), Color::rgb(230, 0, 0))]).unwrap();
//! assert_eq!(catalog.list_offerings().len(), 1);
//! assert!(catalog.brand_color("Barclays").is_err());
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Result, SiteError};

/// How often an offering pays its coupon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CouponFrequency {
    Annual,
    #[serde(rename = "Semi-annual")]
    SemiAnnual,
    Quarterly,
    Monthly,
}

impl CouponFrequency {
    pub fn label(&self) -> &'static str {
        match self {
            CouponFrequency::Annual => "Annual",
            CouponFrequency::SemiAnnual => "Semi-annual",
            CouponFrequency::Quarterly => "Quarterly",
            CouponFrequency::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for CouponFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One bond product shown to prospects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferingRecord {
    /// Issuer display name; unique within a catalog.
    pub name: String,
    /// ISIN-like identifier, shown as-is.
    pub identifier: String,
    pub credit_rating: String,
    pub coupon_frequency: CouponFrequency,
    /// DD/MM/YYYY display string.
    pub maturity_date: String,
    /// Display percentage, e.g. `"9.625%"`.
    pub yield_label: String,
    pub description: String,
    pub currency: String,
    /// Opaque reference handed to the asset server.
    pub logo_asset_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_investment: Option<String>,
}

/// Immutable, ordered collection of offerings and their brand colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogData", into = "CatalogData")]
pub struct Catalog {
    offerings: Vec<OfferingRecord>,
    brand_colors: BTreeMap<String, Color>,
}

/// Wire shape of a catalog inside a market file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogData {
    offerings: Vec<OfferingRecord>,
    #[serde(default)]
    brand_colors: BTreeMap<String, Color>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate offering names.
    ///
    /// Brand colours for names that are not in `offerings` are kept; they are
    /// simply never looked up.
    pub fn new(
        offerings: Vec<OfferingRecord>,
        brand_colors: impl IntoIterator<Item = (String, Color)>,
    ) -> Result<Self> {
        let mut seen = HashSet::with_capacity(offerings.len());
        for offering in &offerings {
            if !seen.insert(offering.name.as_str()) {
                return Err(SiteError::DuplicateOffering(offering.name.clone()));
            }
        }

        Ok(Self {
            offerings,
            brand_colors: brand_colors.into_iter().collect(),
        })
    }

    /// All offerings in presentation order. Same slice on every call.
    pub fn list_offerings(&self) -> &[OfferingRecord] {
        &self.offerings
    }

    pub fn find(&self, name: &str) -> Option<&OfferingRecord> {
        self.offerings.iter().find(|offering| offering.name == name)
    }

    /// Brand colour registered for an offering.
    ///
    /// Fails with [`SiteError::UnknownOffering`] when the offering is not in the
    /// catalog or has no colour. Rendering code should prefer
    /// [`brand_color_or`](Self::brand_color_or).
    pub fn brand_color(&self, name: &str) -> Result<&Color> {
        self.brand_colors
            .get(name)
            .filter(|_| self.find(name).is_some())
            .ok_or_else(|| SiteError::UnknownOffering(name.to_string()))
    }

    /// Brand colour with a fallback for misses.
    pub fn brand_color_or<'a>(&'a self, name: &str, fallback: &'a Color) -> &'a Color {
        match self.brand_color(name) {
            Ok(color) => color,
            Err(err) => {
                log::debug!("{err}, using fallback accent {fallback}");
                fallback
            }
        }
    }

    pub fn len(&self) -> usize {
        self.offerings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offerings.is_empty()
    }
}

impl TryFrom<CatalogData> for Catalog {
    type Error = SiteError;

    fn try_from(data: CatalogData) -> Result<Self> {
        Catalog::new(data.offerings, data.brand_colors)
    }
}

impl From<Catalog> for CatalogData {
    fn from(catalog: Catalog) -> Self {
        Self {
            offerings: catalog.offerings,
            brand_colors: catalog.brand_colors,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn offering(name: &str) -> OfferingRecord {
        OfferingRecord {
            name: name.to_string(),
            identifier: format!("XS{:0>10}", name.len()),
            credit_rating: "A".to_string(),
            coupon_frequency: CouponFrequency::Quarterly,
            maturity_date: "22/11/2049".to_string(),
            yield_label: "9.625%".to_string(),
            description: format!("{name} bond"),
            currency: "GBP".to_string(),
            logo_asset_ref: format!("/{}-logo.png", name.to_lowercase()),
            minimum_investment: Some("£100,000".to_string()),
        }
    }

    pub(crate) fn five_bank_catalog() -> Catalog {
        let names = ["Deutsche Bank", "Barclays", "Santander", "UBS", "JP Morgan"];
        Catalog::new(
            names.iter().map(|name| offering(name)).collect(),
            [
                ("Barclays".to_string(), Color::rgb(0x00, 0xAE, 0xEF)),
                ("Santander".to_string(), Color::rgb(0xEC, 0x00, 0x00)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_list_is_stable() {
        let catalog = five_bank_catalog();
        let first: Vec<_> = catalog.list_offerings().iter().map(|o| o.name.clone()).collect();
        let second: Vec<_> = catalog.list_offerings().iter().map(|o| o.name.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(first, ["Deutsche Bank", "Barclays", "Santander", "UBS", "JP Morgan"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Catalog::new(vec![offering("UBS"), offering("UBS")], []).unwrap_err();
        assert_eq!(err, SiteError::DuplicateOffering("UBS".to_string()));
    }

    #[test]
    fn test_brand_color_lookup() {
        let catalog = five_bank_catalog();
        assert_eq!(catalog.brand_color("Barclays"), Ok(&Color::rgb(0x00, 0xAE, 0xEF)));
        assert_eq!(
            catalog.brand_color("Lloyds"),
            Err(SiteError::UnknownOffering("Lloyds".to_string()))
        );
        // In the catalog but without a colour
        assert!(catalog.brand_color("UBS").is_err());
    }

    #[test]
    fn test_brand_color_fallback() {
        let catalog = five_bank_catalog();
        let fallback = Color::rgb(0x01, 0x21, 0x69);
        assert_eq!(catalog.brand_color_or("Lloyds", &fallback), &fallback);
        assert_eq!(
            catalog.brand_color_or("Santander", &fallback),
            &Color::rgb(0xEC, 0x00, 0x00)
        );
    }

    #[test]
    fn test_coupon_frequency_wire_labels() {
        let json = serde_json::to_string(&CouponFrequency::SemiAnnual).unwrap();
        assert_eq!(json, "\"Semi-annual\"");
        assert_eq!(CouponFrequency::SemiAnnual.to_string(), "Semi-annual");
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let catalog = five_bank_catalog();
        let mut value = serde_json::to_value(&catalog).unwrap();
        let first = value["offerings"][0].clone();
        value["offerings"].as_array_mut().unwrap().push(first);

        let err = serde_json::from_value::<Catalog>(value).unwrap_err();
        assert!(err.to_string().contains("Duplicate offering name: Deutsche Bank"));
    }
}
