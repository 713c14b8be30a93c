//! Ambient audio controller
//!
//! Two states, Idle and Playing, plus an orthogonal muted flag. Audio never
//! starts without an explicit toggle, so it is always muted while Idle.
//! The controller does not touch any audio device itself; it emits
//! [`AudioCommand`]s for the caller to apply to its sink.

use tracing::debug;

/// Observable playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub started: bool,
    pub muted: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            started: false,
            muted: true,
        }
    }
}

/// Side effect requested from the audio backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    /// Play from the beginning, unmuted
    Start,
    Mute,
    Unmute,
    /// Stop playback and rewind to zero
    StopAndRewind,
}

#[derive(Debug, Clone, Default)]
pub struct AudioController {
    state: PlaybackState,
}

impl AudioController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.started
    }

    pub fn is_muted(&self) -> bool {
        self.state.muted
    }

    /// Handle the user's audio toggle
    pub fn toggle(&mut self) -> AudioCommand {
        let command = if !self.state.started {
            self.state = PlaybackState {
                started: true,
                muted: false,
            };
            AudioCommand::Start
        } else if self.state.muted {
            self.state.muted = false;
            AudioCommand::Unmute
        } else {
            self.state.muted = true;
            AudioCommand::Mute
        };

        debug!(?command, state = ?self.state, "Audio toggled");
        command
    }

    /// Stop and rewind, whatever the current state
    pub fn teardown(&mut self) -> AudioCommand {
        self.state = PlaybackState::default();
        AudioCommand::StopAndRewind
    }
}
