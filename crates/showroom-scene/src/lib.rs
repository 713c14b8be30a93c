//! Showroom Scene - Shared 3D stage and presentation components
//!
//! This crate wires the engine-independent state from `showroom-core` into
//! Bevy: the camera and lighting stage, the presentation rig that turns the
//! model on drag, the per-frame model rotation, and responsive scaling.

pub mod presentation;
pub mod presenter;
pub mod responsive;
pub mod stage;
pub mod ui;

use bevy::prelude::*;
use showroom_core::ShowroomConfig;

/// Configuration shared by every showroom plugin
#[derive(Debug, Clone, Default, Resource)]
pub struct ShowroomSettings(pub ShowroomConfig);

/// Set by the UI layer each frame when an overlay owns the pointer, so
/// drags over buttons don't turn the model
#[derive(Debug, Clone, Copy, Default, Resource)]
pub struct PointerCaptured(pub bool);

/// Plugin that sets up the shared 3D scene components
pub struct ShowroomScenePlugin;

impl Plugin for ShowroomScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShowroomSettings>()
            .init_resource::<PointerCaptured>()
            .add_plugins(stage::StagePlugin)
            .add_plugins(responsive::ResponsivePlugin)
            .add_plugins(presentation::PresentationPlugin)
            .add_plugins(presenter::PresenterPlugin);
    }
}

pub use presentation::PresentationRig;
pub use presenter::{ModelLoadStatus, ShowroomModel};
pub use responsive::ActiveScale;
pub use stage::MainCamera;
