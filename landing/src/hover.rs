//! Hover state for the steps grid.
//!
//! The grid owns a single `HoverState` inside a signal. Pointer-enter on a
//! card sets it, pointer-leave clears it. Nothing else writes to it.

use crate::content::STEP_COUNT;
use crate::motion::HoverMotion;

/// Index of the grid card currently under the pointer, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState(Option<usize>);

impl HoverState {
    /// Pointer entered card `index`. Indices outside the grid are ignored.
    pub fn enter(&mut self, index: usize) {
        if index >= STEP_COUNT {
            tracing::warn!(index, "hover index outside the steps grid, ignoring");
            return;
        }
        tracing::debug!(index, "card hovered");
        self.0 = Some(index);
    }

    /// Pointer left a card.
    pub fn leave(&mut self) {
        if let Some(index) = self.0.take() {
            tracing::debug!(index, "card unhovered");
        }
    }

    pub fn current(self) -> Option<usize> {
        self.0
    }

    pub fn is_hovered(self, index: usize) -> bool {
        self.0 == Some(index)
    }

    /// Visual pose of card `index` under this state.
    pub fn pose(self, index: usize) -> CardPose {
        if self.is_hovered(index) {
            CardPose::Hovered
        } else {
            CardPose::Resting
        }
    }
}

/// How a card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPose {
    Resting,
    Hovered,
}

impl CardPose {
    pub fn card_class(self) -> &'static str {
        match self {
            CardPose::Resting => "step-card",
            CardPose::Hovered => "step-card hovered",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            CardPose::Resting => "step-icon",
            CardPose::Hovered => "step-icon wiggle",
        }
    }

    /// Inline transform for the card body.
    pub fn card_style(self) -> String {
        let scale = match self {
            CardPose::Resting => 1.0,
            CardPose::Hovered => HoverMotion::CARD.scale,
        };
        format!("transform: scale({scale});")
    }
}
