//! Rotating model presenter
//!
//! Spawns the showcased glTF scene inside the presentation rig and turns it
//! a fixed step about the vertical axis every frame. Until the scene asset is
//! loaded the model counts as detached and the per-frame step is skipped.

use bevy::asset::LoadState;
use bevy::prelude::*;
use showroom_core::ModelOrientation;

use crate::presentation::PresentationRig;
use crate::responsive::ActiveScale;
use crate::ShowroomSettings;

/// The showcased model and its current yaw
#[derive(Component, Debug, Default)]
pub struct ShowroomModel {
    pub orientation: ModelOrientation,
}

/// Whether the model's scene asset is attached yet
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelLoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

pub struct PresenterPlugin;

impl Plugin for PresenterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_presented_model)
            .add_systems(Update, (track_model_load, rotate_model).chain());
    }
}

fn spawn_presented_model(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<ShowroomSettings>,
    scale: Res<ActiveScale>,
) {
    let path = settings.0.model.path.clone();
    tracing::info!("Loading model: {}", path);
    let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(path));

    commands
        .spawn((
            PresentationRig::default(),
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|rig| {
            rig.spawn((
                SceneRoot(scene),
                Transform::from_scale(Vec3::splat(scale.factor)),
                ShowroomModel::default(),
                ModelLoadStatus::Loading,
            ));
        });
}

/// Promote models to `Ready` once their scene is loaded, and report failures
fn track_model_load(
    asset_server: Res<AssetServer>,
    mut models: Query<(&SceneRoot, &mut ModelLoadStatus), With<ShowroomModel>>,
) {
    for (scene_root, mut status) in &mut models {
        if *status != ModelLoadStatus::Loading {
            continue;
        }

        match asset_server.get_load_state(scene_root.0.id()) {
            Some(LoadState::Failed(err)) => {
                tracing::error!("Failed to load model: {}", err);
                *status = ModelLoadStatus::Failed;
            }
            _ if asset_server.is_loaded_with_dependencies(scene_root.0.id()) => {
                tracing::info!("Model attached");
                *status = ModelLoadStatus::Ready;
            }
            _ => {
                // Still loading
            }
        }
    }
}

/// Advance every attached model by one frame's yaw step
pub fn rotate_model(
    scale: Res<ActiveScale>,
    mut models: Query<(&mut ShowroomModel, &mut Transform, &ModelLoadStatus)>,
) {
    for (mut model, mut transform, status) in &mut models {
        if *status != ModelLoadStatus::Ready {
            continue;
        }

        model.orientation = model.orientation.step();
        transform.rotation = Quat::from_rotation_y(model.orientation.yaw);
        transform.scale = Vec3::splat(scale.factor);
    }
}
