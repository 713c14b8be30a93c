//! Showroom Core - Renderer-independent state for the product showcase
//!
//! This crate holds everything about the showcase that can be reasoned about
//! without a renderer:
//! - Per-frame model orientation stepping and presentation drag math
//! - The ambient audio controller state machine
//! - The loading sequencer and the cancellable `Timer`s that drive it
//! - Viewport width to model scale selection
//! - Static readouts, configuration and error types

pub mod audio;
pub mod config;
pub mod error;
pub mod loading;
pub mod orientation;
pub mod presentation;
pub mod readout;
pub mod responsive;

pub use audio::{AudioCommand, AudioController, PlaybackState};
pub use config::{load_config, save_default_config, ShowroomConfig};
pub use error::{Result, ShowroomError};
pub use loading::{LoadingSequencer, LoadingState, LoadingUpdate};
pub use orientation::ModelOrientation;
pub use presentation::PresentationRotation;
pub use readout::{Readout, READOUTS};
pub use responsive::{ScaleThresholds, ViewportScale};
