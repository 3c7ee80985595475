use crate::content::{CTA_LABEL, HERO_SUBTITLE, HERO_TITLE};
use crate::motion::Entrance;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero interactive">
            <div class="container hero-inner enter" style=Entrance::HERO.style()>
                <h1 class="hero-title enter" style=Entrance::HEADING.style()>
                    {HERO_TITLE}
                </h1>
                <p class="hero-subtitle enter" style=Entrance::SUBHEADING.style()>
                    {HERO_SUBTITLE}
                </p>
                <div class="hero-actions enter" style=Entrance::CTA.style()>
                    <CallToAction />
                </div>
            </div>
        </section>
    }
}

/// Glowing pill with the sign-in prompt. Deliberately not a link or button:
/// it has no action on this page.
#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <div class="cta">
            <div class="cta-glow" aria-hidden="true"></div>
            <div class="cta-pill" role="note">
                <span>{CTA_LABEL}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_heading_subheading_and_cta() {
        let html = view! { <Hero /> }.to_html();

        assert!(html.contains("Turn Ideas into Reality"));
        assert!(html.contains("Share your vision, find the perfect team"));
        assert!(html.contains("Get Started by signing in with your GitHub account"));
    }

    #[test]
    fn cta_is_not_actionable() {
        let html = view! { <CallToAction /> }.to_html();

        assert!(!html.contains("<a"));
        assert!(!html.contains("<button"));
        assert!(!html.contains("href"));
    }

    #[test]
    fn hero_elements_enter_in_sequence() {
        let html = view! { <Hero /> }.to_html();

        let heading = html.find("animation-delay: 0.2s").unwrap();
        let sub = html.find("animation-delay: 0.3s").unwrap();
        let cta = html.find("animation-delay: 0.4s").unwrap();
        assert!(heading < sub && sub < cta);
    }
}
