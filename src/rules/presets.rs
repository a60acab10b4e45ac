//! Ready-made rule bundles for the common table zones.
//!
//! Scene setup typically registers a challenge zone and a discard zone:
//!
//! ```
//! use ccg_drop::core::{Rect, ZoneKind};
//! use ccg_drop::games::simple::{SimpleCard, SimpleTable};
//! use ccg_drop::rules::presets;
//! use ccg_drop::zones::DropZone;
//!
//! let challenge = DropZone::<SimpleCard, SimpleTable>::builder("challenge", ZoneKind::Challenge)
//!     .bounds(Rect::new(50.0, 50.0, 100.0, 100.0))
//!     .priority(10)
//!     .validator(presets::challenge_zone())
//!     .action(presets::challenge_zone_action())
//!     .build();
//! assert!(challenge.is_ok());
//! ```

use crate::core::RuleError;

use super::action::{sequence, DropAction};
use super::capability::{CardView, TablePlay, TableView};
use super::validator::{combine, Validator};

// =============================================================================
// Validators
// =============================================================================

/// Accepts every drop.
pub fn always<E: 'static, S: 'static>() -> Validator<E, S> {
    Validator::always()
}

/// Rejects every drop.
pub fn never<E: 'static, S: 'static>() -> Validator<E, S> {
    Validator::never()
}

/// The local player must be allowed to act.
pub fn players_turn<E: 'static, S: TableView + 'static>() -> Validator<E, S> {
    Validator::from_fn(|_: &E, state: &S| state.is_player_turn()).with_reason("Not your turn")
}

/// A challenge must be waiting for cards.
pub fn has_active_challenge<E: 'static, S: TableView + 'static>() -> Validator<E, S> {
    Validator::from_fn(|_: &E, state: &S| state.has_active_challenge())
        .with_reason("No active challenge")
}

/// The dragged card must be playable.
pub fn card_is_playable<E: CardView + 'static, S: 'static>() -> Validator<E, S> {
    Validator::from_fn(|card: &E, _: &S| card.is_playable()).with_reason("Card cannot be played")
}

/// The local player must still hold at least one card.
pub fn hand_not_empty<E: 'static, S: TableView + 'static>() -> Validator<E, S> {
    Validator::from_fn(|_: &E, state: &S| state.hand_size() > 0).with_reason("Hand is empty")
}

/// Rules for the challenge zone: turn, then challenge, then card.
pub fn challenge_zone<E: CardView + 'static, S: TableView + 'static>() -> Validator<E, S> {
    combine([players_turn(), has_active_challenge(), card_is_playable()])
}

/// Rules for the discard zone: only the turn is checked.
pub fn discard_zone<E: 'static, S: TableView + 'static>() -> Validator<E, S> {
    players_turn()
}

// =============================================================================
// Actions
// =============================================================================

/// Does nothing.
pub fn noop<E: 'static, S: 'static>() -> DropAction<E, S> {
    DropAction::noop()
}

/// Emit an info event naming the card and the zone.
pub fn log_drop<E: CardView + 'static, S: 'static>(zone: &'static str) -> DropAction<E, S> {
    DropAction::new(move |card: &E, _: &mut S| {
        tracing::info!(zone, card = card.name(), "card dropped");
        Ok(())
    })
}

/// Commit the card to the active challenge.
pub fn play_to_challenge<E: 'static, S: TablePlay<E> + 'static>() -> DropAction<E, S> {
    DropAction::new(|card: &E, state: &mut S| {
        if !state.has_active_challenge() {
            return Err(RuleError::new("Challenge is no longer active"));
        }
        state.play_to_challenge(card)
    })
}

/// Move the card to the discard pile.
pub fn discard_card<E: 'static, S: TablePlay<E> + 'static>() -> DropAction<E, S> {
    DropAction::new(|card: &E, state: &mut S| state.discard(card))
}

/// Action for the challenge zone.
pub fn challenge_zone_action<E, S>() -> DropAction<E, S>
where
    E: CardView + 'static,
    S: TablePlay<E> + 'static,
{
    sequence([play_to_challenge(), log_drop("challenge")])
}

/// Action for the discard zone.
pub fn discard_zone_action<E: CardView + 'static, S: TablePlay<E> + 'static>() -> DropAction<E, S> {
    sequence([discard_card(), log_drop("discard")])
}
