//! Leptos UI components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument (pre-render only)
//! └── LandingPage
//!     └── BackgroundLines
//!         ├── Hero
//!         │   └── CallToAction
//!         ├── StepsGrid
//!         │   └── StepCard ×4
//!         │       └── Icon
//!         └── Footer
//! ```
//!
//! Components render the same markup on both targets. In the browser the
//! steps grid's hover signal is live; in a pre-render it is read once.

mod background;
mod document;
mod footer;
mod hero;
mod icons;
mod page;
mod steps;

pub use background::BackgroundLines;
pub use document::{DocumentMeta, LandingDocument};
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use page::LandingPage;
pub use steps::StepsGrid;
