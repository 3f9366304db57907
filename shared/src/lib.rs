//! # Site Core Library
//!
//! Presentation data model and state logic for the bond offering site. The
//! browser frontend (`site-web`) renders what this crate decides; nothing here
//! touches the DOM, so every rule can be tested natively.
//!
//! ## Structure
//!
//! - **[`catalog`]**: Typed bond offerings and their brand colours
//! - **[`branding`]**: Size/variant resolution for the identity mark
//! - **[`splash`]**: Timed `Loading -> Ready` gate in front of the main view
//! - **[`navigation`]**: Mobile menu state and scroll-to-section
//! - **[`lead_form`]**: Controlled consultation form and the submission sink contract
//! - **[`render`]**: Card and table projections of the catalog
//! - **[`market`]**: Per-market configuration (brand, currency, copy, catalog)
//!
//! ## Wiring
//!
//! ```rust
//! use shared::market::MarketConfig;
//! use shared::render::{card_view, table_view};
//!
//! let market = MarketConfig::builtin("uk")?;
//! let cards = card_view(&market.catalog, &market.theme.fallback_accent);
//! let rows = table_view(&market.catalog);
//! assert_eq!(cards.len(), rows.len());
//! # Ok::<(), shared::SiteError>(())
//! ```

pub mod branding;
pub mod catalog;
pub mod color;
pub mod error;
pub mod lead_form;
pub mod market;
pub mod navigation;
pub mod render;
pub mod splash;

pub use color::Color;
pub use error::{Result, SiteError};
