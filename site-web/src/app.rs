//! Root component: splash gate, then the single-page site.

use leptos::prelude::*;
use shared::market::MarketConfig;
use shared::splash::SplashController;

use crate::components::{
    AboutSection, Footer, HeroSection, LeadForm, Navbar, OfferingGrid, OfferingTable, SplashScreen,
    TrustIndicators,
};
use crate::services::GlooScheduler;
use crate::state::site::provide_site_context;

#[component]
pub fn App(market: MarketConfig) -> impl IntoView {
    let delay = market.splash_delay();
    provide_site_context(market);

    let (ready, set_ready) = signal(false);
    let splash = StoredValue::new_local(SplashController::new(GlooScheduler, delay));
    splash.update_value(|controller| controller.start(move || set_ready.set(true)));

    // Unmounting while the splash is still up must not leave a timer behind
    on_cleanup(move || splash.update_value(|controller| controller.teardown()));

    view! {
        <Show when=move || ready.get() fallback=|| view! { <SplashScreen/> }>
            <MainView/>
        </Show>
    }
}

#[component]
fn MainView() -> impl IntoView {
    view! {
        <div class="site">
            <Navbar/>
            <HeroSection/>
            <TrustIndicators/>
            <section id="products" class="section section-products">
                <OfferingGrid/>
                <OfferingTable/>
            </section>
            <AboutSection/>
            <LeadForm/>
            <Footer/>
        </div>
    }
}
