//! # Market Configuration
//!
//! One deployment of the site (brand, currency, copy, contact details and the
//! offering catalog) expressed as data instead of a forked template.
//!
//! Built-in markets are JSON files under `shared/markets/`, embedded at compile
//! time. [`MarketConfig::from_json`] loads any other market with the same
//! shape.
//!
//! ## Usage
//!
//! ```rust
//! use shared::market::MarketConfig;
//!
//! let uk = MarketConfig::builtin("uk").unwrap();
//! assert_eq!(uk.currency.code, "GBP");
//! assert!(MarketConfig::builtin("mars").is_err());
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::color::Color;
use crate::error::{Result, SiteError};
use crate::lead_form::PostSubmitPolicy;
use crate::splash::DEFAULT_SPLASH_DELAY;

/// Market used when the page does not ask for one.
pub const DEFAULT_MARKET: &str = "uk";

const BUILTIN_MARKETS: &[(&str, &str)] = &[
    ("uk", include_str!("../markets/uk.json")),
    ("eu", include_str!("../markets/eu.json")),
];

/// Identity mark text and asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandIdentity {
    /// Leading part of the name, in the primary colour ("The Rate").
    pub name_lead: String,
    /// Trailing part, in the accent colour ("Move").
    pub name_accent: String,
    /// Secondary label shown under the name on large marks.
    pub tagline: String,
    pub legal_name: String,
    pub logo_asset_ref: String,
    pub logo_alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    pub code: String,
    pub symbol: String,
}

/// Page-level colours. Mark colours come from the branding resolver instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteTheme {
    pub primary: Color,
    pub secondary: Color,
    /// Card accent for offerings without a registered brand colour.
    pub fallback_accent: Color,
}

/// A titled blurb: trust indicators, "why choose us" points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub body: String,
}

/// A headline figure in the about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Every piece of market-specific copy on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteCopy {
    pub loading_title: String,
    pub loading_subtitle: String,
    pub loading_footnote: String,
    pub hero_title: String,
    pub hero_highlight: String,
    pub hero_body: String,
    pub hero_image_ref: String,
    pub trust_points: Vec<Highlight>,
    pub products_title: String,
    pub products_body: String,
    pub about_title: String,
    pub about_paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
    pub features_title: String,
    pub features: Vec<Highlight>,
    pub contact_title: String,
    pub contact_body: String,
    pub footer_blurb: String,
    pub risk_warning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub phone_display: String,
    /// `tel:` link target.
    pub phone_href: String,
    pub email: String,
    /// Registration lines for the footer's legal column.
    pub registrations: Vec<String>,
}

/// A complete market: everything that differs between deployments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    pub market_id: String,
    pub brand: BrandIdentity,
    pub currency: CurrencyConfig,
    pub theme: SiteTheme,
    pub copy: SiteCopy,
    pub contact: ContactDetails,
    #[serde(default = "default_splash_delay_ms")]
    pub splash_delay_ms: u64,
    #[serde(default)]
    pub post_submit: PostSubmitPolicy,
    pub catalog: Catalog,
}

fn default_splash_delay_ms() -> u64 {
    DEFAULT_SPLASH_DELAY.as_millis() as u64
}

impl MarketConfig {
    /// Parse a market file.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: MarketConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// One of the markets compiled into the binary.
    pub fn builtin(market_id: &str) -> Result<Self> {
        let (_, json) = BUILTIN_MARKETS
            .iter()
            .find(|(id, _)| id.eq_ignore_ascii_case(market_id))
            .ok_or_else(|| SiteError::UnknownMarket(market_id.to_string()))?;

        log::debug!("Loading built-in market '{market_id}'");
        Self::from_json(json)
    }

    pub fn builtin_ids() -> impl Iterator<Item = &'static str> {
        BUILTIN_MARKETS.iter().map(|(id, _)| *id)
    }

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.market_id.trim().is_empty() {
            return Err(SiteError::Config("market_id must not be empty".to_string()));
        }
        if self.catalog.is_empty() {
            return Err(SiteError::Config(format!(
                "market '{}' has no offerings",
                self.market_id
            )));
        }
        if self.splash_delay_ms == 0 || self.splash_delay_ms > 30_000 {
            return Err(SiteError::Config(
                "splash_delay_ms must be between 1 and 30000".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CouponFrequency;

    #[test]
    fn test_builtin_uk() {
        let uk = MarketConfig::builtin("uk").unwrap();
        let names: Vec<_> = uk.catalog.list_offerings().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Deutsche Bank", "Barclays", "Santander", "UBS", "JP Morgan"]);
        assert_eq!(uk.currency.symbol, "£");
        assert_eq!(uk.splash_delay(), Duration::from_secs(3));
        assert_eq!(uk.post_submit, PostSubmitPolicy::KeepValues);

        let ubs = uk.catalog.find("UBS").unwrap();
        assert_eq!(ubs.coupon_frequency, CouponFrequency::SemiAnnual);
        assert_eq!(ubs.yield_label, "9.016%");
    }

    #[test]
    fn test_every_builtin_parses() {
        for id in MarketConfig::builtin_ids() {
            let market = MarketConfig::builtin(id).unwrap();
            assert_eq!(market.market_id, id);
            for offering in market.catalog.list_offerings() {
                assert_eq!(offering.currency, market.currency.code, "{id}/{}", offering.name);
            }
        }
    }

    #[test]
    fn test_builtin_lookup_ignores_case() {
        assert!(MarketConfig::builtin("UK").is_ok());
        assert_eq!(
            MarketConfig::builtin("jp").unwrap_err(),
            SiteError::UnknownMarket("jp".to_string())
        );
    }

    #[test]
    fn test_markets_differ_only_in_data() {
        let uk = MarketConfig::builtin("uk").unwrap();
        let eu = MarketConfig::builtin("eu").unwrap();
        assert_ne!(uk.currency, eu.currency);
        assert_eq!(uk.catalog.len(), eu.catalog.len());
    }

    #[test]
    fn test_defaults_applied() {
        let uk = MarketConfig::builtin("uk").unwrap();
        let mut value = serde_json::to_value(&uk).unwrap();
        let object = value.as_object_mut().unwrap();
        object.remove("splash_delay_ms");
        object.remove("post_submit");

        let parsed = MarketConfig::from_json(&value.to_string()).unwrap();
        assert_eq!(parsed.splash_delay_ms, 3000);
        assert_eq!(parsed.post_submit, PostSubmitPolicy::KeepValues);
    }

    #[test]
    fn test_rejects_bad_config() {
        let uk = MarketConfig::builtin("uk").unwrap();

        let mut zero_delay = uk.clone();
        zero_delay.splash_delay_ms = 0;
        assert!(matches!(zero_delay.validate(), Err(SiteError::Config(_))));

        let mut value = serde_json::to_value(&uk).unwrap();
        value["theme"]["primary"] = "navy".into();
        assert!(matches!(
            MarketConfig::from_json(&value.to_string()),
            Err(SiteError::Config(_))
        ));

        assert!(matches!(MarketConfig::from_json("{}"), Err(SiteError::Config(_))));
    }
}
