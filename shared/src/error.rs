//! # Site Error Types
//!
//! Consolidated error handling for the presentation core.
//!
//! Nothing in here is fatal to the page. The worst a caller should do with a
//! [`SiteError`] is log it and render a slightly less complete view.
//!
//! ## Error Categories
//!
//! - **Catalog**: lookups and construction of the offering catalog
//! - **Form**: a submit attempt blocked by missing fields, or refused by the sink
//! - **Navigation**: a scroll target that the view does not expose
//! - **Config**: market configuration that failed to load

use thiserror::Error;

use crate::lead_form::LeadField;

pub type Result<T> = std::result::Result<T, SiteError>;

/// Error type for every fallible operation in the core.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SiteError {
    /// Branding or detail lookup for a name that is not in the catalog.
    #[error("Unknown offering: {0}")]
    UnknownOffering(String),

    /// Two catalog entries share a name; names are lookup keys.
    #[error("Duplicate offering name: {0}")]
    DuplicateOffering(String),

    /// Submit attempted while one or more required fields are empty.
    ///
    /// This is surfaced inline next to the controls, never thrown at the user.
    #[error("Submission blocked, missing fields: {}", join_fields(.missing))]
    ValidationBlocked { missing: Vec<LeadField> },

    /// The submission sink refused the lead.
    #[error("Submission failed: {0}")]
    Submission(String),

    /// No built-in market with this identifier.
    #[error("Unknown market: {0}")]
    UnknownMarket(String),

    /// Colour value that is not `#RRGGBB`.
    #[error("Invalid colour: {0}")]
    InvalidColor(String),

    /// Market configuration could not be decoded.
    #[error("Configuration error: {0}")]
    Config(String),
}

fn join_fields(fields: &[LeadField]) -> String {
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::Config(err.to_string())
    }
}
