//! The landing page: hero, steps grid and footer over the line background.

use super::{BackgroundLines, Footer, Hero, StepsGrid};
use crate::clock::FooterStamp;
use crate::hover::HoverState;
use leptos::prelude::*;

#[component]
pub fn LandingPage(
    /// Footer time values. Read from the system clock when not supplied.
    #[prop(optional)]
    stamp: Option<FooterStamp>,
    /// Hover signal for the steps grid.
    #[prop(optional)]
    hover: Option<RwSignal<HoverState>>,
    /// Skip the scroll-triggered reveal of the steps grid.
    #[prop(default = false)]
    revealed: bool,
) -> impl IntoView {
    let stamp = stamp.unwrap_or_else(FooterStamp::now);
    let hover = hover.unwrap_or_else(|| RwSignal::new(HoverState::default()));

    view! {
        <div class="landing">
            <BackgroundLines>
                <Hero />
                <StepsGrid hover=hover revealed=revealed />
                <Footer stamp=stamp />
            </BackgroundLines>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::content::STEPS;
    use leptos::tachys::view::RenderHtml;

    fn stamp() -> FooterStamp {
        FooterStamp::from_clock(&FixedClock::at(2026, 6, 1, 12, 0, 0).unwrap())
    }

    fn render(hover: RwSignal<HoverState>) -> String {
        view! { <LandingPage stamp=stamp() hover=hover /> }.to_html()
    }

    fn title_at(html: &str, title: &str) -> usize {
        html.find(&format!(">{title}</h3>")).expect("step title rendered")
    }

    /// Titles of the cards drawn hovered. A card's body opens after the
    /// previous card's title and before its own.
    fn hovered_titles(html: &str) -> Vec<&'static str> {
        let marks: Vec<usize> = html.match_indices("step-card hovered").map(|(i, _)| i).collect();
        STEPS
            .iter()
            .enumerate()
            .filter(|(i, step)| {
                let end = title_at(html, step.title);
                let start = match i {
                    0 => 0,
                    _ => title_at(html, STEPS[i - 1].title),
                };
                marks.iter().any(|m| *m > start && *m < end)
            })
            .map(|(_, step)| step.title)
            .collect()
    }

    #[test]
    fn sections_render_in_order() {
        let owner = Owner::new();
        owner.with(|| {
            let html = render(RwSignal::new(HoverState::default()));

            let hero = html.find("class=\"hero").unwrap();
            let steps = html.find("id=\"how-it-works\"").unwrap();
            let footer = html.find("<footer").unwrap();
            assert!(hero < steps && steps < footer);
        });
    }

    #[test]
    fn hover_then_leave() {
        let owner = Owner::new();
        owner.with(|| {
            let hover = RwSignal::new(HoverState::default());
            assert!(hovered_titles(&render(hover)).is_empty());

            hover.update(|h| h.enter(2));
            assert_eq!(hovered_titles(&render(hover)), vec!["Connect"]);

            hover.update(|h| h.leave());
            assert!(hovered_titles(&render(hover)).is_empty());
        });
    }

    #[test]
    fn rendering_alone_never_hovers() {
        let owner = Owner::new();
        owner.with(|| {
            let hover = RwSignal::new(HoverState::default());
            let html = render(hover);
            let _ = render(hover);
            assert_eq!(hover.get_untracked(), HoverState::default());

            let cta_start = html.find("class=\"cta\"").unwrap();
            let cta = &html[cta_start..html.find("id=\"how-it-works\"").unwrap()];
            let footer = &html[html.find("<footer").unwrap()..];
            for markup in [cta, footer] {
                assert!(!markup.contains("<button"));
                assert!(!markup.contains(" onclick"));
                assert!(!markup.contains(" onmouse"));
            }
            assert!(!cta.contains("<a "));
        });
    }

    #[test]
    fn footer_year_follows_the_clock() {
        let owner = Owner::new();
        owner.with(|| {
            let html = render(RwSignal::new(HoverState::default()));
            assert!(html.contains("© Copyright 2026"));
        });
    }

    #[test]
    fn defaults_to_system_clock() {
        use chrono::Datelike;

        let owner = Owner::new();
        owner.with(|| {
            let html = view! { <LandingPage /> }.to_html();
            let year = chrono::Local::now().year();
            assert!(
                html.contains(&format!("© Copyright {year}"))
                    || html.contains(&format!("© Copyright {}", year - 1))
            );
        });
    }
}
