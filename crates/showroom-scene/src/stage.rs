//! Camera and lighting stage

use bevy::prelude::*;

use crate::ShowroomSettings;

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Plugin for the camera, light and background setup
pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_stage);
    }
}

fn setup_stage(mut commands: Commands, settings: Res<ShowroomSettings>) {
    let stage = &settings.0.stage;

    let [r, g, b] = stage.background_rgb().unwrap_or_else(|e| {
        tracing::warn!("Invalid background color, using black: {}", e);
        [0, 0, 0]
    });
    commands.insert_resource(ClearColor(Color::srgb_u8(r, g, b)));

    let [x, y, z] = stage.camera_position;
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: stage.fov_degrees.to_radians(),
            ..default()
        }),
        Transform::from_xyz(x, y, z).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    // Ambient only, the model is lit evenly from every side
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: stage.ambient_brightness,
        ..default()
    });

    tracing::debug!(fov = stage.fov_degrees, "Stage ready");
}
