//! Buffered one-shot sound cues awaiting playback by the host audio layer.
//!
//! Mixing and playback belong to the host. Gameplay code only describes what
//! should be heard through [`SoundCue`] values pushed into a [`CueSink`].

use bevy::prelude::Resource;
use serde::Serialize;

use crate::ghost::GhostId;

/// Identifies which gameplay feature emitted a cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CueSource {
    /// Proximity heartbeat driven by the nearest ghost.
    Heartbeat {
        /// Ghost currently holding heartbeat duty.
        ghost: GhostId,
    },
    /// Player footstep.
    Footstep,
}

/// A single fire-and-forget sound request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundCue {
    /// Clip identifier understood by the host.
    pub clip: String,
    /// Playback volume in `[0, 1]`.
    pub volume: f32,
    /// Playback pitch multiplier.
    pub pitch: f32,
    /// Feature that produced the cue.
    pub source: CueSource,
}

/// Receiver of one-shot sound requests.
#[cfg_attr(test, mockall::automock)]
pub trait CueSink {
    /// Queues `cue` for playback.
    fn play_one_shot(&mut self, cue: SoundCue);
}

/// Frame-scoped queue of cues for the host to drain.
#[derive(Resource, Debug, Default)]
pub struct AudioOutbox {
    cues: Vec<SoundCue>,
}

impl AudioOutbox {
    /// Removes and yields every queued cue.
    pub fn drain(&mut self) -> std::vec::Drain<'_, SoundCue> {
        self.cues.drain(..)
    }

    /// Iterates over queued cues without consuming them.
    pub fn iter(&self) -> std::slice::Iter<'_, SoundCue> {
        self.cues.iter()
    }

    /// Number of queued cues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

impl CueSink for AudioOutbox {
    fn play_one_shot(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }
}
