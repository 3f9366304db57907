//! Consultation request form.
//!
//! Every control carries its field name in the `name` attribute, so one input
//! handler serves them all. Validation and submission live in
//! [`shared::lead_form::LeadFormController`]; this component only mirrors its
//! state.

use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use shared::lead_form::{InvestmentAmountBand, InvestmentTimeline, LeadField, SubmissionStatus};
use shared::navigation::Section;
use wasm_bindgen::JsCast;

use crate::state::site::{use_site_context, SiteContext};

/// Name attribute of the element an event fired on.
fn target_name(ev: &Event) -> Option<String> {
    ev.target()?.dyn_into::<web_sys::Element>().ok()?.get_attribute("name")
}

fn on_field_input(ctx: SiteContext) -> impl Fn(Event) + Copy + 'static {
    move |ev: Event| match target_name(&ev) {
        Some(name) => ctx.update_field(&name, &event_target_value(&ev)),
        None => log::warn!("Form event from a control without a name"),
    }
}

fn status_message(status: SubmissionStatus) -> Option<(&'static str, String)> {
    match status {
        SubmissionStatus::Idle => None,
        SubmissionStatus::Blocked(missing) => {
            let labels = missing.iter().map(LeadField::label).collect::<Vec<_>>().join(", ");
            Some(("form-status form-status-error", format!("Please complete: {labels}")))
        }
        SubmissionStatus::Sent => Some((
            "form-status form-status-success",
            "Thank you. A specialist will contact you within 24 hours.".to_string(),
        )),
        SubmissionStatus::Failed(reason) => Some((
            "form-status form-status-error",
            format!("We could not send your request: {reason}"),
        )),
    }
}

#[component]
fn TextField(field: LeadField, input_type: &'static str, placeholder: &'static str) -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <div class="form-field">
            <label for=field.name()>{field.label()}" *"</label>
            <input
                id=field.name()
                name=field.name()
                type=input_type
                placeholder=placeholder
                required=true
                prop:value=move || ctx.field_value(field)
                on:input=on_field_input(ctx)
            />
        </div>
    }
}

#[component]
pub fn LeadForm() -> impl IntoView {
    let ctx = use_site_context();
    let (copy, currency, contact) = ctx.market.with_value(|market| {
        (market.copy.clone(), market.currency.clone(), market.contact.clone())
    });

    let amount_options = InvestmentAmountBand::ALL
        .into_iter()
        .map(|band| view! { <option value=band.value()>{band.label(&currency.symbol)}</option> })
        .collect_view();
    let timeline_options = InvestmentTimeline::ALL
        .into_iter()
        .map(|timeline| view! { <option value=timeline.value()>{timeline.label()}</option> })
        .collect_view();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <section id=Section::Contact.id() class="section section-contact">
            <div class="section-header">
                <h2>{copy.contact_title}</h2>
                <p>{copy.contact_body}</p>
            </div>
            <form class="lead-form" on:submit=on_submit>
                <div class="form-row">
                    <TextField field=LeadField::FullName input_type="text" placeholder="Enter your full name"/>
                    <TextField field=LeadField::Email input_type="email" placeholder="your.email@example.com"/>
                </div>
                <div class="form-row">
                    <TextField field=LeadField::PhoneNumber input_type="tel" placeholder="Enter your phone number"/>
                    <div class="form-field">
                        <label for=LeadField::InvestmentAmount.name()>
                            {format!("Investment Amount ({}) *", currency.code)}
                        </label>
                        <select
                            id=LeadField::InvestmentAmount.name()
                            name=LeadField::InvestmentAmount.name()
                            required=true
                            prop:value=move || ctx.field_value(LeadField::InvestmentAmount)
                            on:change=on_field_input(ctx)
                        >
                            <option value="">"Select amount range"</option>
                            {amount_options}
                        </select>
                    </div>
                </div>
                <div class="form-field">
                    <label for=LeadField::InvestmentTimeline.name()>
                        {LeadField::InvestmentTimeline.label()}" *"
                    </label>
                    <select
                        id=LeadField::InvestmentTimeline.name()
                        name=LeadField::InvestmentTimeline.name()
                        required=true
                        prop:value=move || ctx.field_value(LeadField::InvestmentTimeline)
                        on:change=on_field_input(ctx)
                    >
                        <option value="">"Select timeline"</option>
                        {timeline_options}
                    </select>
                </div>
                {move || {
                    status_message(ctx.status())
                        .map(|(class, message)| view! { <p class=class role="status">{message}</p> })
                }}
                <button type="submit" class="btn btn-primary btn-block">
                    "Request Consultation"
                </button>
                <p class="form-footnote">
                    "Prefer to talk? Call us on "
                    <a href=contact.phone_href>{contact.phone_display}</a>
                </p>
            </form>
        </section>
    }
}
