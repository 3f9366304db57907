//! Fixed navigation bar with a collapsible mobile menu

use leptos::prelude::*;
use shared::navigation::Section;

use crate::components::BrandMark;
use crate::state::site::use_site_context;

pub(crate) const NAV_LINKS: [(&str, Section); 3] = [
    ("About", Section::About),
    ("Investment Solutions", Section::Products),
    ("Get Started", Section::Contact),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_site_context();

    let links = move |class: &'static str| {
        NAV_LINKS
            .into_iter()
            .map(|(label, section)| {
                let class = if section == Section::Contact {
                    format!("{class} nav-cta")
                } else {
                    class.to_string()
                };
                view! {
                    <button class=class on:click=move |_| ctx.scroll_to(section)>
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <BrandMark/>
                <div class="nav-desktop">{links("nav-link")}</div>
                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || ctx.is_menu_open().to_string()
                    on:click=move |_| ctx.toggle_menu()
                >
                    {move || if ctx.is_menu_open() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>
            <Show when=move || ctx.is_menu_open()>
                <div class="nav-mobile">{links("nav-mobile-link")}</div>
            </Show>
        </nav>
    }
}
