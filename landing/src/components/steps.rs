//! "How it works" grid.
//!
//! Four fixed cards. The grid owns the hover signal; each card writes it on
//! pointer-enter/leave and reads it to pick its pose.

use super::Icon;
use crate::content::{FeatureStep, STEPS};
use crate::hover::HoverState;
use crate::motion::Entrance;
use leptos::prelude::*;

#[component]
pub fn StepsGrid(
    /// Hover signal. Created locally when not supplied.
    #[prop(optional)]
    hover: Option<RwSignal<HoverState>>,
    /// Play card entrances immediately instead of waiting for the grid to
    /// scroll into view. Static pre-render sets this.
    #[prop(default = false)]
    revealed: bool,
) -> impl IntoView {
    let hover = hover.unwrap_or_else(|| RwSignal::new(HoverState::default()));
    let grid_class = if revealed { "steps-grid in-view" } else { "steps-grid" };

    view! {
        <section id="how-it-works" class="steps interactive">
            <div class="container">
                <div class=grid_class data-reveal="once">
                    {STEPS
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|(index, step)| view! { <StepCard index=index step=step hover=hover /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepCard(index: usize, step: FeatureStep, hover: RwSignal<HoverState>) -> impl IntoView {
    let pose = move || hover.get().pose(index);

    view! {
        <div
            class="step enter"
            style=Entrance::grid_item(index).style()
            data-index=index.to_string()
            on:mouseenter=move |_| hover.update(|h| h.enter(index))
            on:mouseleave=move |_| hover.update(|h| h.leave())
        >
            <div class=move || pose().card_class() style=move || pose().card_style()>
                <div class=move || pose().icon_class() data-icon=step.icon.name()>
                    <Icon paths=step.icon.paths() size="48" />
                </div>
                <h3 class="step-title">{step.title}</h3>
                <p class="step-description">{step.description}</p>
            </div>
        </div>
    }
}
