//! Site footer

use leptos::prelude::*;
use shared::branding::{SizeClass, Variant};

use crate::components::navbar::NAV_LINKS;
use crate::components::BrandMark;
use crate::state::site::use_site_context;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_site_context();
    let (brand, copy, contact) = ctx.market.with_value(|market| {
        (market.brand.clone(), market.copy.clone(), market.contact.clone())
    });
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <BrandMark size=SizeClass::Medium variant=Variant::Inverted/>
                    <p>{copy.footer_blurb}</p>
                </div>
                <div class="footer-column">
                    <h4>"Quick Links"</h4>
                    <ul>
                        {NAV_LINKS
                            .into_iter()
                            .map(|(label, section)| {
                                view! {
                                    <li>
                                        <button class="footer-link" on:click=move |_| ctx.scroll_to(section)>
                                            {label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>"Contact"</h4>
                    <p><a href=contact.phone_href>{contact.phone_display}</a></p>
                    <p><a href=format!("mailto:{}", contact.email)>{contact.email.clone()}</a></p>
                </div>
                <div class="footer-column">
                    <h4>"Regulation"</h4>
                    {contact
                        .registrations
                        .into_iter()
                        .map(|line| view! { <p>{line}</p> })
                        .collect_view()}
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("\u{A9} {year} {}. All rights reserved.", brand.legal_name)}</p>
                <p class="footer-risk">{copy.risk_warning}</p>
            </div>
        </footer>
    }
}
