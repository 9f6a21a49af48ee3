use log::info;
use serde::Serialize;

use crate::domain::CurrentGame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Pure transition rule for the overlay, applied once per poll result.
///
/// A game outside the recency window forces Hidden no matter what; a hidden
/// overlay comes back only for an ongoing game. Every other combination
/// keeps the current state so an unchanged poll never flickers.
pub fn next(state: Visibility, game: &CurrentGame) -> Visibility {
    if !game.today {
        Visibility::Hidden
    } else if state == Visibility::Hidden && game.ongoing {
        Visibility::Visible
    } else {
        state
    }
}

/// Holds the overlay's visibility between polls. Starts Visible.
#[derive(Debug)]
pub struct VisibilityController {
    state: Visibility,
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityController {
    pub fn new() -> Self {
        Self {
            state: Visibility::Visible,
        }
    }

    /// Apply the transition rule to a poll result.
    /// Returns the new state when it changed, None when nothing moved.
    pub fn observe(&mut self, game: &CurrentGame) -> Option<Visibility> {
        let state = next(self.state, game);
        if state == self.state {
            return None;
        }
        info!("Overlay visibility: {:?} -> {:?}", self.state, state);
        self.state = state;
        Some(state)
    }

    /// Operator-driven override, bypassing the transition rules
    pub fn force(&mut self, state: Visibility) {
        self.state = state;
    }

    pub fn state(&self) -> Visibility {
        self.state
    }
}
