//! Narrow views of cards and game state used by the preset rules.
//!
//! The drag core never looks inside the dragged entity or the game state.
//! Presets that need to ask questions ("is it the player's turn?") do it
//! through these traits, so games implement only what their zones use and
//! tests can pass plain fixtures.

use crate::core::RuleError;

/// What the presets need to know about a dragged card.
pub trait CardView {
    /// Display name, used in log lines.
    fn name(&self) -> &str;

    /// Can this card be played right now (not exhausted, not locked)?
    fn is_playable(&self) -> bool;
}

/// What the presets need to know about the table.
pub trait TableView {
    /// Is the local player allowed to act?
    fn is_player_turn(&self) -> bool;

    /// Is a challenge waiting for cards?
    fn has_active_challenge(&self) -> bool;

    /// Cards in the local player's hand.
    fn hand_size(&self) -> usize;
}

/// State changes the preset actions perform.
pub trait TablePlay<C>: TableView {
    /// Commit `card` to the active challenge.
    fn play_to_challenge(&mut self, card: &C) -> Result<(), RuleError>;

    /// Move `card` from the hand to the discard pile.
    fn discard(&mut self, card: &C) -> Result<(), RuleError>;
}
