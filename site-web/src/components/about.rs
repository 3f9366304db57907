//! About section: company story, headline figures, reasons to choose us.

use leptos::prelude::*;
use shared::navigation::Section;

use crate::state::site::use_site_context;

#[component]
pub fn AboutSection() -> impl IntoView {
    let copy = use_site_context().market.with_value(|market| market.copy.clone());

    view! {
        <section id=Section::About.id() class="section section-about">
            <div class="about-grid">
                <div class="about-story">
                    <h2>{copy.about_title}</h2>
                    {copy
                        .about_paragraphs
                        .into_iter()
                        .map(|paragraph| view! { <p>{paragraph}</p> })
                        .collect_view()}
                    <div class="about-stats">
                        {copy
                            .stats
                            .into_iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat">
                                        <div class="stat-value">{stat.value}</div>
                                        <div class="stat-label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="about-features">
                    <h3>{copy.features_title}</h3>
                    {copy
                        .features
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <div class="feature">
                                    <span class="feature-check">"\u{2713}"</span>
                                    <div>
                                        <h4>{feature.title}</h4>
                                        <p>{feature.body}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
