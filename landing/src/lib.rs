//! # findmyteam-landing
//!
//! The FindMyTeam landing page as Leptos components.
//!
//! The same components serve two targets:
//!
//! - **Browser (CSR)**: the `findmyteam-landing` binary, built for wasm32 with
//!   `trunk` and the `csr` feature, mounts [`components::LandingPage`] and
//!   keeps the steps-grid hover state live.
//! - **Pre-render (SSR)**: [`render_document`] turns the page into a static
//!   HTML string with Leptos 0.8's `RenderHtml`. The footer's timestamp is
//!   then the render time.
//!
//! ## Quick Start
//!
//! ```rust
//! use findmyteam_landing::{render_document, clock::FixedClock, components::DocumentMeta};
//!
//! let clock = FixedClock::at(2026, 1, 2, 3, 4, 5).unwrap();
//! let html = render_document(&DocumentMeta::default(), &clock);
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("© Copyright 2026"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - fixed copy and the four feature steps
//! - [`hover`] - hover state of the steps grid
//! - [`motion`] - entrance and hover animation parameters
//! - [`clock`] - wall-clock access for the footer
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS

pub mod clock;
pub mod components;
pub mod content;
pub mod hover;
pub mod motion;
pub mod styles;

#[cfg(feature = "csr")]
pub mod reveal;
#[cfg(feature = "csr")]
pub mod telemetry;

use clock::{Clock, FooterStamp};
use components::{DocumentMeta, LandingDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the complete landing page document.
///
/// The clock is read once; the copyright year and the "Server time" line both
/// come from that reading.
pub fn render_document(meta: &DocumentMeta, clock: &impl Clock) -> String {
    let stamp = FooterStamp::from_clock(clock);
    tracing::debug!(year = stamp.year, timestamp = %stamp.timestamp, "rendering landing document");

    let owner = Owner::new();
    let html = owner.with(|| {
        view! { <LandingDocument meta=meta.clone() stamp=stamp /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
