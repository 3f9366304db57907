//! # Lead Form Controller
//!
//! Controlled state for the consultation form and the submission contract.
//!
//! ## Field Updates
//!
//! The form is updated one field at a time with [`LeadFormController::update_field`],
//! keyed by the control's `name` attribute. Each call replaces exactly one field
//! and leaves the rest alone. Unknown names are ignored.
//!
//! ## Submission
//!
//! [`LeadFormController::submit`] refuses to proceed unless every field has a
//! value, mirroring the browser's `required` check. A complete form is handed
//! to a [`SubmissionSink`] exactly once per call. What happens to the values
//! afterwards is the market's [`PostSubmitPolicy`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{Result, SiteError};

/// The form's controls, by their `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeadField {
    FullName,
    Email,
    PhoneNumber,
    InvestmentAmount,
    InvestmentTimeline,
}

impl LeadField {
    pub const ALL: [LeadField; 5] = [
        LeadField::FullName,
        LeadField::Email,
        LeadField::PhoneNumber,
        LeadField::InvestmentAmount,
        LeadField::InvestmentTimeline,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LeadField::FullName => "fullName",
            LeadField::Email => "email",
            LeadField::PhoneNumber => "phoneNumber",
            LeadField::InvestmentAmount => "investmentAmount",
            LeadField::InvestmentTimeline => "investmentTimeline",
        }
    }

    /// Human label for the control, without the required marker.
    pub fn label(&self) -> &'static str {
        match self {
            LeadField::FullName => "Full Name",
            LeadField::Email => "Email Address",
            LeadField::PhoneNumber => "Phone Number",
            LeadField::InvestmentAmount => "Investment Amount",
            LeadField::InvestmentTimeline => "Investment Timeline",
        }
    }
}

impl FromStr for LeadField {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        LeadField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or(())
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How much the prospect intends to invest. Ordered smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InvestmentAmountBand {
    #[serde(rename = "100000-250000")]
    From100kTo250k,
    #[serde(rename = "250000-500000")]
    From250kTo500k,
    #[serde(rename = "500000-1000000")]
    From500kTo1m,
    #[serde(rename = "1000000-2500000")]
    From1mTo2_5m,
    #[serde(rename = "2500000+")]
    Over2_5m,
}

impl InvestmentAmountBand {
    pub const ALL: [InvestmentAmountBand; 5] = [
        InvestmentAmountBand::From100kTo250k,
        InvestmentAmountBand::From250kTo500k,
        InvestmentAmountBand::From500kTo1m,
        InvestmentAmountBand::From1mTo2_5m,
        InvestmentAmountBand::Over2_5m,
    ];

    /// The `<option value>` for this band.
    pub fn value(&self) -> &'static str {
        match self {
            InvestmentAmountBand::From100kTo250k => "100000-250000",
            InvestmentAmountBand::From250kTo500k => "250000-500000",
            InvestmentAmountBand::From500kTo1m => "500000-1000000",
            InvestmentAmountBand::From1mTo2_5m => "1000000-2500000",
            InvestmentAmountBand::Over2_5m => "2500000+",
        }
    }

    /// Display label in the market's currency, e.g. `£100,000 - £250,000`.
    pub fn label(&self, symbol: &str) -> String {
        match self {
            InvestmentAmountBand::From100kTo250k => format!("{symbol}100,000 - {symbol}250,000"),
            InvestmentAmountBand::From250kTo500k => format!("{symbol}250,000 - {symbol}500,000"),
            InvestmentAmountBand::From500kTo1m => format!("{symbol}500,000 - {symbol}1,000,000"),
            InvestmentAmountBand::From1mTo2_5m => format!("{symbol}1,000,000 - {symbol}2,500,000"),
            InvestmentAmountBand::Over2_5m => format!("{symbol}2,500,000+"),
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.value() == value)
    }
}

/// When the prospect wants to invest. Ordered soonest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InvestmentTimeline {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "1-month")]
    WithinOneMonth,
    #[serde(rename = "3-months")]
    WithinThreeMonths,
    #[serde(rename = "6-months")]
    WithinSixMonths,
}

impl InvestmentTimeline {
    pub const ALL: [InvestmentTimeline; 4] = [
        InvestmentTimeline::Immediate,
        InvestmentTimeline::WithinOneMonth,
        InvestmentTimeline::WithinThreeMonths,
        InvestmentTimeline::WithinSixMonths,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            InvestmentTimeline::Immediate => "immediate",
            InvestmentTimeline::WithinOneMonth => "1-month",
            InvestmentTimeline::WithinThreeMonths => "3-months",
            InvestmentTimeline::WithinSixMonths => "6-months",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvestmentTimeline::Immediate => "Immediate (within 2 weeks)",
            InvestmentTimeline::WithinOneMonth => "Within 1 month",
            InvestmentTimeline::WithinThreeMonths => "Within 3 months",
            InvestmentTimeline::WithinSixMonths => "Within 6 months",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|timeline| timeline.value() == value)
    }
}

/// The prospect's in-progress submission. Serialises with the form's field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFormState {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub investment_amount: Option<InvestmentAmountBand>,
    pub investment_timeline: Option<InvestmentTimeline>,
}

impl LeadFormState {
    /// Current value of a control, as the view would display it.
    pub fn value(&self, field: LeadField) -> &str {
        match field {
            LeadField::FullName => &self.full_name,
            LeadField::Email => &self.email,
            LeadField::PhoneNumber => &self.phone_number,
            LeadField::InvestmentAmount => self.investment_amount.map_or("", |band| band.value()),
            LeadField::InvestmentTimeline => self.investment_timeline.map_or("", |t| t.value()),
        }
    }

    /// Fields that would block a submit, in form order.
    pub fn missing_fields(&self) -> Vec<LeadField> {
        LeadField::ALL
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// A sink's refusal, reported back to the form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0}")]
    Rejected(String),
}

pub type SubmitResult = std::result::Result<(), SubmitError>;

/// Where completed leads go. Implemented outside the core.
pub trait SubmissionSink {
    fn submit(&mut self, lead: &LeadFormState) -> SubmitResult;
}

/// Sink that only writes the lead to the diagnostic log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, lead: &LeadFormState) -> SubmitResult {
        match serde_json::to_string(lead) {
            Ok(json) => log::info!("Form submitted: {json}"),
            Err(_) => log::info!("Form submitted: {lead:?}"),
        }
        Ok(())
    }
}

/// What the form does with its values after a successful submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostSubmitPolicy {
    /// Leave the values in place (the form shows a confirmation beside them).
    #[default]
    KeepValues,
    ClearOnSuccess,
}

/// Outcome of the most recent submit attempt, for inline feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Blocked(Vec<LeadField>),
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFormController {
    state: LeadFormState,
    policy: PostSubmitPolicy,
    status: SubmissionStatus,
}

impl LeadFormController {
    pub fn new(policy: PostSubmitPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn state(&self) -> &LeadFormState {
        &self.state
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn policy(&self) -> PostSubmitPolicy {
        self.policy
    }

    /// Merge one control's value into the form. Returns whether a field changed.
    ///
    /// Unknown control names and unknown option values are ignored. An empty
    /// value clears a select back to "no choice".
    pub fn update_field(&mut self, name: &str, value: &str) -> bool {
        match name.parse::<LeadField>() {
            Ok(field) => self.set(field, value),
            Err(()) => {
                log::debug!("Ignoring update for unknown form field '{name}'");
                false
            }
        }
    }

    pub fn set(&mut self, field: LeadField, value: &str) -> bool {
        match field {
            LeadField::FullName => replace(&mut self.state.full_name, value),
            LeadField::Email => replace(&mut self.state.email, value),
            LeadField::PhoneNumber => replace(&mut self.state.phone_number, value),
            LeadField::InvestmentAmount => {
                select(&mut self.state.investment_amount, value, InvestmentAmountBand::from_value)
            }
            LeadField::InvestmentTimeline => {
                select(&mut self.state.investment_timeline, value, InvestmentTimeline::from_value)
            }
        }
    }

    /// Validate and hand the form to `sink`.
    ///
    /// # Errors
    ///
    /// - [`SiteError::ValidationBlocked`] if any field is empty; the sink is not called.
    /// - [`SiteError::Submission`] if the sink rejects the lead.
    pub fn submit<S: SubmissionSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        if !self.state.is_complete() {
            let missing = self.state.missing_fields();
            log::debug!("Submit blocked, {} field(s) missing", missing.len());
            self.status = SubmissionStatus::Blocked(missing.clone());
            return Err(SiteError::ValidationBlocked { missing });
        }

        match sink.submit(&self.state) {
            Ok(()) => {
                self.status = SubmissionStatus::Sent;
                if self.policy == PostSubmitPolicy::ClearOnSuccess {
                    self.state = LeadFormState::default();
                }
                Ok(())
            }
            Err(SubmitError::Rejected(reason)) => {
                log::warn!("Lead submission rejected: {reason}");
                self.status = SubmissionStatus::Failed(reason.clone());
                Err(SiteError::Submission(reason))
            }
        }
    }
}

fn replace(slot: &mut String, value: &str) -> bool {
    if *slot == value {
        return false;
    }
    value.clone_into(slot);
    true
}

fn select<T: Copy + PartialEq>(
    slot: &mut Option<T>,
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> bool {
    let next = if value.is_empty() {
        None
    } else {
        match parse(value) {
            Some(choice) => Some(choice),
            None => {
                log::warn!("Ignoring unknown option value '{value}'");
                return false;
            }
        }
    };

    let changed = *slot != next;
    *slot = next;
    changed
}
