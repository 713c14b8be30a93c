//! Drag-to-rotate presentation rig around the model

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use showroom_core::presentation::DragSettings;
use showroom_core::PresentationRotation;

use crate::{PointerCaptured, ShowroomSettings};

/// Parent of the model; pointer drags turn it
#[derive(Component, Debug, Default)]
pub struct PresentationRig {
    pub rotation: PresentationRotation,
}

pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, drag_presentation);
    }
}

/// Turn the rig with left-drag or a single-finger touch drag anywhere on
/// the canvas
fn drag_presentation(
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    captured: Res<PointerCaptured>,
    settings: Res<ShowroomSettings>,
    mut rigs: Query<(&mut PresentationRig, &mut Transform)>,
) {
    if captured.0 {
        return;
    }
    let Ok(window) = windows.single() else { return };

    let mut delta = Vec2::ZERO;
    if mouse_button.pressed(MouseButton::Left) {
        delta += mouse_motion.delta;
    }
    if touch_input.iter().count() == 1 {
        for touch in touch_input.iter() {
            delta += touch.delta();
        }
    }
    if delta == Vec2::ZERO {
        return;
    }

    let drag_settings = settings.0.stage.drag_settings();
    let viewport = [window.width(), window.height()];
    for (mut rig, mut transform) in &mut rigs {
        apply_drag(&mut rig, &mut transform, delta, viewport, &drag_settings);
    }
}

fn apply_drag(
    rig: &mut PresentationRig,
    transform: &mut Transform,
    delta: Vec2,
    viewport: [f32; 2],
    settings: &DragSettings,
) {
    rig.rotation.drag(delta.to_array(), viewport, settings);
    transform.rotation = Quat::from_euler(
        EulerRot::XYZ,
        rig.rotation.polar,
        rig.rotation.azimuth,
        0.0,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_4, PI};

    #[test]
    fn test_drag_updates_rig_transform() {
        let mut rig = PresentationRig::default();
        let mut transform = Transform::default();

        apply_drag(
            &mut rig,
            &mut transform,
            Vec2::new(200.0, 0.0),
            [800.0, 600.0],
            &DragSettings::default(),
        );

        assert!((rig.rotation.azimuth - PI / 2.0).abs() < 1e-5);
        let expected = Quat::from_rotation_y(PI / 2.0);
        assert!(transform.rotation.angle_between(expected) < 1e-4);
    }

    #[test]
    fn test_drag_tilt_is_clamped() {
        let mut rig = PresentationRig::default();
        let mut transform = Transform::default();

        apply_drag(
            &mut rig,
            &mut transform,
            Vec2::new(0.0, 5000.0),
            [800.0, 600.0],
            &DragSettings::default(),
        );

        assert_eq!(rig.rotation.polar, FRAC_PI_4);
        let expected = Quat::from_rotation_x(FRAC_PI_4);
        assert!(transform.rotation.angle_between(expected) < 1e-4);
    }
}
