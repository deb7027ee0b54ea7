//! Keyboard/pointer selection state
//!
//! Tracks whether the suggestion panel is open and which suggestion is
//! highlighted. The state machine has two states, `Closed` and
//! `Open(highlight)`; closing always drops the highlight.

mod state;

pub use state::SelectionState;
