//! Identity mark: logo tile plus the two-tone name.

use leptos::prelude::*;
use shared::branding::{self, SizeClass, Variant};

use crate::state::site::use_site_context;

#[component]
pub fn BrandMark(
    #[prop(optional)] size: SizeClass,
    #[prop(optional)] variant: Variant,
    #[prop(default = true)] show_text: bool,
) -> impl IntoView {
    let brand = use_site_context().market.with_value(|market| market.brand.clone());
    let tokens = branding::resolve(size, variant, show_text);
    let icon_style = format!("width: {0}px; height: {0}px;", tokens.icon_dimension);

    let text = tokens.show_text.then(|| {
        let tagline = tokens.secondary_label_visible.then(|| {
            view! {
                <span class="brand-tagline" style=format!("color: {};", tokens.secondary_label_color)>
                    {brand.tagline.clone()}
                </span>
            }
        });

        view! {
            <div class="brand-text">
                <div
                    class="brand-name"
                    style=format!("font-size: {}rem; color: {};", tokens.text_scale, tokens.primary_color)
                >
                    <span>{brand.name_lead.clone()}</span>
                    <span class="brand-accent" style=format!("color: {};", tokens.accent_color)>
                        {brand.name_accent.clone()}
                    </span>
                </div>
                {tagline}
            </div>
        }
    });

    view! {
        <div class="brand-mark">
            <div class="brand-icon" style=icon_style.clone()>
                <img src=brand.logo_asset_ref.clone() alt=brand.logo_alt.clone() style=icon_style.clone()/>
            </div>
            {text}
        </div>
    }
}
