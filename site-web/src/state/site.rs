//! Site state management

use leptos::prelude::*;
use shared::lead_form::{LeadField, LeadFormController, LogSink, SubmissionStatus};
use shared::market::MarketConfig;
use shared::navigation::{NavigationController, Section};

use crate::services::DomSectionLocator;

/// Global site context: the market plus the page's controllers.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub market: StoredValue<MarketConfig>,
    pub nav: RwSignal<NavigationController>,
    pub form: RwSignal<LeadFormController>,
}

impl SiteContext {
    pub fn new(market: MarketConfig) -> Self {
        let policy = market.post_submit;
        Self {
            market: StoredValue::new(market),
            nav: RwSignal::new(NavigationController::new()),
            form: RwSignal::new(LeadFormController::new(policy)),
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.nav.with(|nav| nav.is_menu_open())
    }

    pub fn toggle_menu(&self) {
        self.nav.update(NavigationController::toggle_menu);
    }

    pub fn scroll_to(&self, section: Section) {
        self.nav.update(|nav| {
            nav.scroll_to_section(&DomSectionLocator, section);
        });
    }

    pub fn activate_offering(&self, name: &str) {
        log::debug!("Offering '{name}' activated");
        self.nav.update(|nav| {
            nav.on_offering_activated(&DomSectionLocator);
        });
    }

    pub fn field_value(&self, field: LeadField) -> String {
        self.form.with(|form| form.state().value(field).to_string())
    }

    pub fn update_field(&self, name: &str, value: &str) {
        self.form.update(|form| {
            form.update_field(name, value);
        });
    }

    pub fn submit(&self) {
        self.form.update(|form| {
            if let Err(err) = form.submit(&mut LogSink) {
                log::info!("{err}");
            }
        });
    }

    pub fn status(&self) -> SubmissionStatus {
        self.form.with(|form| form.status().clone())
    }
}

pub fn provide_site_context(market: MarketConfig) -> SiteContext {
    let context = SiteContext::new(market);
    provide_context(context);
    context
}

pub fn use_site_context() -> SiteContext {
    expect_context::<SiteContext>()
}
