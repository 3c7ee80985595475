//! Fixed copy for the landing page.
//!
//! Everything rendered as text lives here so the components stay about
//! layout and motion only.

use crate::components::StepIcon;

/// Product name shown in the footer and the document title.
pub const BRAND_NAME: &str = "FindMyTeam";

/// Hero heading.
pub const HERO_TITLE: &str = "Turn Ideas into Reality";

/// Hero sub-heading.
pub const HERO_SUBTITLE: &str = "Connect with passionate collaborators and bring your projects to life. \
     Share your vision, find the perfect team, and start building together.";

/// Call-to-action label. Visual only, sign-in lives elsewhere in the app.
pub const CTA_LABEL: &str = "Get Started by signing in with your GitHub account";

/// Footer attribution.
pub const ATTRIBUTION_NAME: &str = "Priyansh Agarwal";
pub const ATTRIBUTION_URL: &str = "https://priyanshagarwal.me/";

/// One stage of the "how it works" grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureStep {
    pub icon: StepIcon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Number of steps in the grid. Hover indices are valid in `0..STEP_COUNT`.
pub const STEP_COUNT: usize = 4;

/// The workflow, in display order.
pub const STEPS: [FeatureStep; STEP_COUNT] = [
    FeatureStep {
        icon: StepIcon::Lightbulb,
        title: "Share Your Ideas",
        description: "Post your project ideas and let the community discover them",
    },
    FeatureStep {
        icon: StepIcon::Users,
        title: "Find Collaborators",
        description: "Talented individuals can apply to join your project",
    },
    FeatureStep {
        icon: StepIcon::Handshake,
        title: "Connect",
        description: "Accept the perfect match and start collaborating",
    },
    FeatureStep {
        icon: StepIcon::MessagesSquare,
        title: "Start Creating",
        description: "Exchange contacts and bring your ideas to life",
    },
];
