// FindMyTeam landing page, browser entry point (built by trunk with `csr`)

use findmyteam_landing::components::LandingPage;
use findmyteam_landing::styles::stylesheet;
use findmyteam_landing::{reveal, telemetry};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    telemetry::init(if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    });

    leptos::mount::mount_to_body(|| view! { <App /> });
    tracing::info!("landing page mounted");
}

#[component]
fn App() -> impl IntoView {
    // Reveal targets exist once the first render has committed.
    Effect::new(|| reveal::observe_reveal_targets());

    view! {
        <style>{stylesheet()}</style>
        <LandingPage />
    }
}
