//! Simple table implementation.

use serde::{Deserialize, Serialize};

use crate::core::{Rect, RuleError, ZoneError, ZoneKind};
use crate::rules::{presets, CardView, TablePlay, TableView};
use crate::session::DragController;
use crate::zones::DropZone;

/// A card in the local player's hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleCard {
    pub id: u32,
    pub name: String,
    /// False once the card is exhausted.
    pub playable: bool,
}

impl SimpleCard {
    /// A playable card.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            playable: true,
        }
    }

    /// Mark the card exhausted.
    #[must_use]
    pub fn exhausted(mut self) -> Self {
        self.playable = false;
        self
    }
}

impl CardView for SimpleCard {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_playable(&self) -> bool {
        self.playable
    }
}

/// An open challenge collecting cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub name: String,
    pub committed: Vec<SimpleCard>,
}

/// Table state seen by the local player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleTable {
    pub player_turn: bool,
    pub challenge: Option<Challenge>,
    pub hand: Vec<SimpleCard>,
    pub discard_pile: Vec<SimpleCard>,
}

impl SimpleTable {
    /// A table on the local player's turn holding `hand`.
    pub fn with_hand(hand: Vec<SimpleCard>) -> Self {
        Self {
            player_turn: true,
            hand,
            ..Self::default()
        }
    }

    /// Open a challenge.
    pub fn open_challenge(&mut self, name: impl Into<String>) {
        self.challenge = Some(Challenge {
            name: name.into(),
            committed: Vec::new(),
        });
    }

    /// Close the challenge, returning it.
    pub fn close_challenge(&mut self) -> Option<Challenge> {
        self.challenge.take()
    }

    fn take_from_hand(&mut self, card: &SimpleCard) -> Result<SimpleCard, RuleError> {
        let index = self
            .hand
            .iter()
            .position(|held| held.id == card.id)
            .ok_or_else(|| RuleError::new(format!("{} is not in hand", card.name)))?;
        Ok(self.hand.remove(index))
    }
}

impl TableView for SimpleTable {
    fn is_player_turn(&self) -> bool {
        self.player_turn
    }

    fn has_active_challenge(&self) -> bool {
        self.challenge.is_some()
    }

    fn hand_size(&self) -> usize {
        self.hand.len()
    }
}

impl TablePlay<SimpleCard> for SimpleTable {
    fn play_to_challenge(&mut self, card: &SimpleCard) -> Result<(), RuleError> {
        if self.challenge.is_none() {
            return Err(RuleError::new("Challenge is no longer active"));
        }
        let card = self.take_from_hand(card)?;
        if let Some(challenge) = self.challenge.as_mut() {
            challenge.committed.push(card);
        }
        Ok(())
    }

    fn discard(&mut self, card: &SimpleCard) -> Result<(), RuleError> {
        let card = self.take_from_hand(card)?;
        self.discard_pile.push(card);
        Ok(())
    }
}

/// Where the standard zones sit on screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableLayout {
    pub challenge: Rect,
    pub discard: Rect,
    /// Magnetic radius given to both zones.
    pub magnetic_radius: f32,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            challenge: Rect::new(50.0, 50.0, 100.0, 100.0),
            discard: Rect::new(200.0, 50.0, 100.0, 100.0),
            magnetic_radius: 0.0,
        }
    }
}

/// Build the challenge zone (priority 10) and discard zone (priority 5).
pub fn standard_zones(
    layout: &TableLayout,
) -> Result<Vec<DropZone<SimpleCard, SimpleTable>>, ZoneError> {
    let challenge = DropZone::builder("challenge", ZoneKind::Challenge)
        .bounds(layout.challenge)
        .priority(10)
        .magnetic_radius(layout.magnetic_radius)
        .validator(presets::challenge_zone())
        .action(presets::challenge_zone_action())
        .build()?;

    let discard = DropZone::builder("discard", ZoneKind::Discard)
        .bounds(layout.discard)
        .priority(5)
        .magnetic_radius(layout.magnetic_radius)
        .validator(presets::discard_zone())
        .action(presets::discard_zone_action())
        .build()?;

    Ok(vec![challenge, discard])
}

/// Register the standard zones with a controller.
pub fn install_standard_zones(
    controller: &mut DragController<SimpleCard, SimpleTable>,
    layout: &TableLayout,
) -> Result<(), ZoneError> {
    for zone in standard_zones(layout)? {
        controller.add_zone(zone)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point, SessionConfig};
    use std::time::Duration;

    fn table() -> SimpleTable {
        SimpleTable::with_hand(vec![SimpleCard::new(1, "Scout"), SimpleCard::new(2, "Guard")])
    }

    #[test]
    fn test_discard_moves_card() {
        let mut table = table();
        table.discard(&SimpleCard::new(1, "Scout")).unwrap();

        assert_eq!(table.hand_size(), 1);
        assert_eq!(table.discard_pile[0].name, "Scout");
    }

    #[test]
    fn test_card_not_in_hand() {
        let mut table = table();
        let err = table.discard(&SimpleCard::new(9, "Ghost")).unwrap_err();
        assert_eq!(err.message(), "Ghost is not in hand");
    }

    #[test]
    fn test_play_to_challenge() {
        let mut table = table();
        assert!(table.play_to_challenge(&SimpleCard::new(2, "Guard")).is_err());

        table.open_challenge("Ambush");
        table.play_to_challenge(&SimpleCard::new(2, "Guard")).unwrap();

        let challenge = table.close_challenge().unwrap();
        assert_eq!(challenge.committed.len(), 1);
        assert_eq!(table.hand_size(), 1);
    }

    #[test]
    fn test_standard_zones_drop_flow() {
        let mut controller = DragController::new(SessionConfig::default());
        install_standard_zones(&mut controller, &TableLayout::default()).unwrap();
        assert_eq!(controller.zones().len(), 2);

        let mut table = table();
        let card = SimpleCard::new(1, "Scout");

        // No challenge: only discard is valid
        controller.start(card.clone(), &table, Point::new(0.0, 0.0), Duration::ZERO).unwrap();
        assert_eq!(controller.valid_zones().len(), 1);
        let result = controller.end(Point::new(100.0, 100.0), &mut table);
        assert!(!result.success());

        table.open_challenge("Ambush");
        controller.start(card, &table, Point::new(0.0, 0.0), Duration::ZERO).unwrap();
        let result = controller.end(Point::new(100.0, 100.0), &mut table);
        assert_eq!(result.zone().map(|id| id.as_str()), Some("challenge"));
        assert_eq!(table.challenge.unwrap().committed.len(), 1);
    }
}
