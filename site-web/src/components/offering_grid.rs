//! Offering cards. Every card leads to the consultation form.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use shared::render::card_view;

use crate::state::site::use_site_context;

#[component]
pub fn OfferingGrid() -> impl IntoView {
    let ctx = use_site_context();
    let (title, body) = ctx
        .market
        .with_value(|market| (market.copy.products_title.clone(), market.copy.products_body.clone()));

    let cards = ctx.market.with_value(|market| {
        card_view(&market.catalog, &market.theme.fallback_accent)
            .into_iter()
            .map(|card| {
                let name = card.name.to_string();
                let key_name = name.clone();
                let minimum = card.minimum_investment.map(|minimum| {
                    view! {
                        <div class="offering-detail">
                            <span>"Minimum Investment"</span>
                            <span>{minimum.to_string()}</span>
                        </div>
                    }
                });

                view! {
                    <div
                        class="offering-card"
                        role="button"
                        tabindex="0"
                        data-target=card.target.id()
                        style=format!("--offering-accent: {};", card.accent)
                        on:click=move |_| ctx.activate_offering(&name)
                        on:keydown=move |ev: KeyboardEvent| {
                            if ev.key() == "Enter" || ev.key() == " " {
                                ev.prevent_default();
                                ctx.activate_offering(&key_name);
                            }
                        }
                    >
                        <div class="offering-header">
                            <div class="offering-issuer">
                                <div class="offering-logo">
                                    <img src=card.logo_asset_ref.to_string() alt=card.logo_alt/>
                                </div>
                                <div>
                                    <h3>{card.name.to_string()}</h3>
                                    <p class="offering-denomination">{card.denomination}</p>
                                </div>
                            </div>
                            <div class="offering-yield">
                                <div class="offering-yield-value">{card.yield_label.to_string()}</div>
                                <div class="offering-yield-label">"Annual Yield"</div>
                            </div>
                        </div>
                        <div class="offering-details">
                            <div class="offering-detail">
                                <span>"Credit Rating"</span>
                                <span class="offering-rating">{card.credit_rating.to_string()}</span>
                            </div>
                            <div class="offering-detail">
                                <span>"Coupon Frequency"</span>
                                <span>{card.coupon_frequency}</span>
                            </div>
                            <div class="offering-detail">
                                <span>"Maturity Date"</span>
                                <span>{card.maturity_date.to_string()}</span>
                            </div>
                            {minimum}
                        </div>
                        <p class="offering-description">{card.description.to_string()}</p>
                        <div class="offering-cta">"Enquire about this bond \u{203A}"</div>
                    </div>
                }
            })
            .collect_view()
    });

    view! {
        <div class="section-header">
            <h2>{title}</h2>
            <p>{body}</p>
        </div>
        <div class="offering-grid">{cards}</div>
    }
}
