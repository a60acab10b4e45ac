//! Post-drop feedback sequences.
//!
//! A sequence is a queue of keyframes played one after another. The adapter
//! starts the first keyframe and the host calls back when each animation
//! finishes; the next keyframe is started from that callback.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::renderer::{Renderer, VisualState};

/// Identifies an animation requested by the adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackStep {
    /// Card picked up.
    Lift,
    /// Card pulled toward a magnetic zone.
    Snap,
    /// Drop accepted: brief enlargement.
    SuccessPulse,
    /// Drop accepted: card fades out of the hand.
    FadeOut,
    /// Drop refused or cancelled: ease back to the pre-drag position.
    ReturnToStart,
    /// Drop refused: error wiggle.
    Shake,
}

/// One animation in a sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub step: FeedbackStep,
    pub from: VisualState,
    pub to: VisualState,
    pub duration: Duration,
}

/// A running sequence for one card.
#[derive(Debug)]
pub struct FeedbackChain<E> {
    entity: E,
    playing: FeedbackStep,
    pending: VecDeque<Keyframe>,
}

impl<E> FeedbackChain<E> {
    /// Start the first keyframe. Returns `None` for an empty sequence.
    pub fn start<R: Renderer<E>>(
        renderer: &mut R,
        entity: E,
        frames: Vec<Keyframe>,
    ) -> Option<Self> {
        let mut pending: VecDeque<Keyframe> = frames.into();
        let first = pending.pop_front()?;
        renderer.animate(&entity, first.from, first.to, first.duration, first.step);
        Some(Self {
            entity,
            playing: first.step,
            pending,
        })
    }

    /// Step currently playing.
    pub fn playing(&self) -> FeedbackStep {
        self.playing
    }

    /// Steps still queued.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// The animated card.
    pub fn entity(&self) -> &E {
        &self.entity
    }

    /// Give up the sequence and take the card back.
    pub fn into_entity(self) -> E {
        self.entity
    }

    /// Handle completion of `finished`.
    ///
    /// Completions for other steps are ignored. Returns `true` once the last
    /// keyframe has finished.
    pub fn advance<R: Renderer<E>>(&mut self, renderer: &mut R, finished: FeedbackStep) -> bool {
        if finished != self.playing {
            return false;
        }
        match self.pending.pop_front() {
            Some(next) => {
                renderer.animate(&self.entity, next.from, next.to, next.duration, next.step);
                self.playing = next.step;
                false
            }
            None => true,
        }
    }
}
