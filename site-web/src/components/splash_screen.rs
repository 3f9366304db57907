//! Full-screen loading view shown while the splash timer runs.

use leptos::prelude::*;
use shared::branding::{SizeClass, Variant};

use crate::components::BrandMark;
use crate::state::site::use_site_context;

#[component]
pub fn SplashScreen() -> impl IntoView {
    let copy = use_site_context().market.with_value(|market| market.copy.clone());

    view! {
        <div class="splash" role="status" aria-live="polite">
            <div class="splash-content">
                <div class="splash-mark">
                    <BrandMark size=SizeClass::ExtraLarge variant=Variant::Inverted/>
                </div>
                <h1 class="splash-title">{copy.loading_title}</h1>
                <p class="splash-subtitle">{copy.loading_subtitle}</p>
                <div class="splash-bar">
                    <div class="splash-bar-fill"></div>
                </div>
                <div class="splash-spinner"></div>
                <p class="splash-footnote">{copy.loading_footnote}</p>
            </div>
        </div>
    }
}
