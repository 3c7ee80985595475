//! Inline SVG icons (Lucide, stroke style).
//!
//! Lucide icons are drawn with strokes on a 24x24 grid, and most are made of
//! several paths, so each icon is a slice of path data.

use leptos::prelude::*;

/// Renders a stroke icon from its path list.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon paths=StepIcon::Users.paths() size="48" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data, one entry per `<path>`
    paths: &'static [&'static str],
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {paths.iter().copied().map(|d| view! { <path d=d></path> }).collect_view()}
        </svg>
    }
}

/// Icons used by the steps grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepIcon {
    Lightbulb,
    Users,
    Handshake,
    MessagesSquare,
}

impl StepIcon {
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            StepIcon::Lightbulb => ICON_LIGHTBULB,
            StepIcon::Users => ICON_USERS,
            StepIcon::Handshake => ICON_HANDSHAKE,
            StepIcon::MessagesSquare => ICON_MESSAGES_SQUARE,
        }
    }

    /// Stable name, used as a `data-icon` hook.
    pub fn name(self) -> &'static str {
        match self {
            StepIcon::Lightbulb => "lightbulb",
            StepIcon::Users => "users",
            StepIcon::Handshake => "handshake",
            StepIcon::MessagesSquare => "messages-square",
        }
    }
}

// =============================================================================
// Lucide - https://lucide.dev/
// =============================================================================

pub const ICON_LIGHTBULB: &[&str] = &[
    "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5",
    "M9 18h6",
    "M10 22h4",
];

pub const ICON_USERS: &[&str] = &[
    "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
    "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
    "M22 21v-2a4 4 0 0 0-3-3.87",
    "M16 3.13a4 4 0 0 1 0 7.75",
];

pub const ICON_HANDSHAKE: &[&str] = &[
    "m11 17 2 2a1 1 0 1 0 3-3",
    "m14 14 2.5 2.5a1 1 0 1 0 3-3l-3.88-3.88a3 3 0 0 0-4.24 0l-.88.88a1 1 0 1 1-3-3l2.81-2.81a5.79 5.79 0 0 1 7.06-.87l.47.28a2 2 0 0 0 1.42.25L21 4",
    "m21 3 1 11h-2",
    "M3 3 2 14l6.5 6.5a1 1 0 1 0 3-3",
    "M3 4h8",
];

pub const ICON_MESSAGES_SQUARE: &[&str] = &[
    "M14 9a2 2 0 0 1-2 2H6l-4 4V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2z",
    "M18 9h2a2 2 0 0 1 2 2v11l-4-4h-6a2 2 0 0 1-2-2v-1",
];
