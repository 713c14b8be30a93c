//! Loading screen sequencer
//!
//! Drives the loading overlay: a repeating timer bumps the percentage every
//! tick, and a one-shot timer ends the loading phase after a fixed total
//! duration no matter how far the ticks got. Both timers live inside the
//! sequencer; [`LoadingSequencer::teardown`] is the single place they are
//! cancelled, and once cancelled nothing can mutate the state again.

use bevy_time::{Timer, TimerMode};
use std::time::Duration;
use tracing::{debug, info};

/// Shortest tick the repeating timer accepts
const MIN_TICK: Duration = Duration::from_millis(1);

/// Timing of the loading sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingSettings {
    /// Interval between percentage bumps
    pub tick: Duration,
    /// Percentage added per tick
    pub step: u8,
    /// Total time before the overlay is dismissed
    pub duration: Duration,
}

impl Default for LoadingSettings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(60),
            step: 2,
            duration: Duration::from_millis(3200),
        }
    }
}

/// Overlay visibility and progress bar value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingState {
    pub active: bool,
    /// Always within `0..=100`
    pub percent: u8,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self {
            active: true,
            percent: 0,
        }
    }
}

/// What an [`LoadingSequencer::advance`] call changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingUpdate {
    Unchanged,
    Progressed { percent: u8 },
    /// The deadline fired; the overlay should be dismissed
    Completed,
}

#[derive(Debug, Clone)]
pub struct LoadingSequencer {
    settings: LoadingSettings,
    state: LoadingState,
    elapsed: Duration,
    ticker: Option<Timer>,
    deadline: Option<Timer>,
}

impl LoadingSequencer {
    /// Activate the sequence: state `{active, 0%}` with both timers armed
    pub fn start(settings: LoadingSettings) -> Self {
        debug!(
            tick_ms = settings.tick.as_millis() as u64,
            duration_ms = settings.duration.as_millis() as u64,
            "Loading sequence started"
        );
        Self {
            settings,
            state: LoadingState::default(),
            elapsed: Duration::ZERO,
            ticker: Some(Timer::new(settings.tick.max(MIN_TICK), TimerMode::Repeating)),
            deadline: Some(Timer::new(settings.duration, TimerMode::Once)),
        }
    }

    pub fn state(&self) -> LoadingState {
        self.state
    }

    pub fn settings(&self) -> LoadingSettings {
        self.settings
    }

    /// Time observed since [`start`](Self::start)
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whether any timer is still pending
    pub fn is_armed(&self) -> bool {
        self.ticker.is_some() || self.deadline.is_some()
    }

    /// Progress as a fraction in `[0, 1]` for progress bars
    pub fn fraction(&self) -> f32 {
        f32::from(self.state.percent) / 100.0
    }

    /// Move the clock forward by `delta`. Ticks that came due are applied
    /// before the deadline is checked.
    pub fn advance(&mut self, delta: Duration) -> LoadingUpdate {
        self.elapsed += delta;
        if !self.is_armed() {
            return LoadingUpdate::Unchanged;
        }

        let before = self.state;

        if let Some(ticker) = self.ticker.as_mut() {
            ticker.tick(delta);
            let bumps = ticker.times_finished_this_tick();
            if bumps > 0 {
                let percent = u32::from(self.state.percent)
                    .saturating_add(bumps.saturating_mul(u32::from(self.settings.step)))
                    .min(100);
                self.state.percent = percent as u8;
            }
        }

        let deadline_fired = self
            .deadline
            .as_mut()
            .is_some_and(|deadline| deadline.tick(delta).just_finished());
        if deadline_fired {
            self.state = LoadingState {
                active: false,
                percent: 100,
            };
            self.teardown();
            info!(elapsed_ms = self.elapsed.as_millis() as u64, "Loading complete");
        }

        if self.state == before {
            LoadingUpdate::Unchanged
        } else if before.active && !self.state.active {
            LoadingUpdate::Completed
        } else {
            LoadingUpdate::Progressed {
                percent: self.state.percent,
            }
        }
    }

    /// Cancel both timers. Safe to call any number of times.
    pub fn teardown(&mut self) {
        if self.is_armed() {
            debug!(percent = self.state.percent, "Loading timers cancelled");
        }
        self.ticker = None;
        self.deadline = None;
    }
}
