//! Keyboard state → camera commands.
//!
//! Movement keys are *held*: they act once per frame for as long as they are
//! down.  Everything else is a one-shot [`Command`] queued when the key is
//! pressed (auto-repeat included) and applied at the top of the next frame.
//! The window layer decides which physical key means what.

use bitflags::bitflags;
use log::debug;
use smallvec::SmallVec;

use crate::world::{CameraState, Command};

bitflags! {
    /// Movement keys currently held down.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Held: u8 {
        const FORWARD    = 1 << 0;
        const BACKWARD   = 1 << 1;
        const TURN_LEFT  = 1 << 2;
        const TURN_RIGHT = 1 << 3;
    }
}

/// Per-frame input snapshot.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    held: Held,
    pending: SmallVec<[Command; 8]>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held-key set (polled once per frame).
    pub fn set_held(&mut self, held: Held) {
        self.held = held;
    }

    #[inline]
    pub fn held(&self) -> Held {
        self.held
    }

    /// Queue a one-shot command for the next frame.
    pub fn push(&mut self, cmd: Command) {
        self.pending.push(cmd);
    }

    pub fn pending(&self) -> &[Command] {
        &self.pending
    }

    /// Apply queued commands, then one step of held movement.
    ///
    /// Called once per frame, before rendering, so the whole render pass
    /// sees a single consistent camera.
    pub fn apply_to(&mut self, camera: &mut CameraState) {
        let adjusted = !self.pending.is_empty();
        for cmd in self.pending.drain(..) {
            camera.apply(cmd);
        }
        if adjusted {
            debug!("camera: {camera:?}");
        }

        if self.held.contains(Held::FORWARD) {
            camera.apply(Command::MoveForward);
        }
        if self.held.contains(Held::BACKWARD) {
            camera.apply(Command::MoveBackward);
        }
        if self.held.contains(Held::TURN_RIGHT) {
            camera.apply(Command::TurnRight);
        }
        if self.held.contains(Held::TURN_LEFT) {
            camera.apply(Command::TurnLeft);
        }
    }
}
