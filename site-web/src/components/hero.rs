//! Hero banner and trust indicators

use leptos::prelude::*;
use shared::navigation::Section;

use crate::state::site::use_site_context;

#[component]
pub fn HeroSection() -> impl IntoView {
    let ctx = use_site_context();
    let copy = ctx.market.with_value(|market| market.copy.clone());

    view! {
        <section class="hero">
            <img class="hero-image" src=copy.hero_image_ref alt="Financial district"/>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h1 class="hero-title">
                    {copy.hero_title}
                    <span class="hero-highlight">{copy.hero_highlight}</span>
                </h1>
                <p class="hero-body">{copy.hero_body}</p>
                <div class="hero-actions">
                    <button class="btn btn-primary" on:click=move |_| ctx.scroll_to(Section::Products)>
                        "View Investment Solutions"
                    </button>
                    <button class="btn btn-outline" on:click=move |_| ctx.scroll_to(Section::Contact)>
                        "Schedule Consultation"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn TrustIndicators() -> impl IntoView {
    let points = use_site_context().market.with_value(|market| market.copy.trust_points.clone());

    view! {
        <section class="trust">
            <div class="trust-grid">
                {points
                    .into_iter()
                    .map(|point| {
                        view! {
                            <div class="trust-item">
                                <h3>{point.title}</h3>
                                <p>{point.body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
