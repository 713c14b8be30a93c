//! Responsive model scale from the viewport width

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use showroom_core::{ScaleThresholds, ViewportScale};

use crate::ShowroomSettings;

/// Scale currently applied to the model
#[derive(Debug, Clone, Copy, PartialEq, Resource)]
pub struct ActiveScale {
    pub scale: ViewportScale,
    pub factor: f32,
    /// Viewport width the scale was selected for
    pub width: Option<f32>,
}

impl Default for ActiveScale {
    fn default() -> Self {
        Self {
            scale: ViewportScale::Full,
            factor: ViewportScale::Full.factor(),
            width: None,
        }
    }
}

impl ActiveScale {
    /// Recompute for a new viewport width. Returns true if the scale changed.
    pub fn update_for_width(&mut self, width: f32, thresholds: &ScaleThresholds) -> bool {
        self.width = Some(width);
        let scale = thresholds.select(width);
        let factor = thresholds.factor(scale);
        let changed = scale != self.scale || factor != self.factor;
        self.scale = scale;
        self.factor = factor;
        changed
    }
}

pub struct ResponsivePlugin;

impl Plugin for ResponsivePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveScale>()
            .add_systems(PreStartup, select_initial_scale)
            .add_systems(Update, select_scale_on_resize);
    }
}

fn select_initial_scale(
    windows: Query<&Window, With<PrimaryWindow>>,
    settings: Res<ShowroomSettings>,
    mut active: ResMut<ActiveScale>,
) {
    let thresholds = settings.0.responsive;
    match windows.single() {
        Ok(window) => {
            active.update_for_width(window.width(), &thresholds);
        }
        Err(_) => {
            // Headless or window not created yet: keep the full-size default
            // with the configured factor
            active.factor = thresholds.factor(active.scale);
        }
    }
    tracing::debug!(scale = ?active.scale, factor = active.factor, "Initial model scale");
}

/// Re-select on every window change; no debouncing
fn select_scale_on_resize(
    windows: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
    settings: Res<ShowroomSettings>,
    mut active: ResMut<ActiveScale>,
) {
    let Ok(window) = windows.single() else { return };

    let width = window.width();
    if active.width == Some(width) {
        return;
    }
    if active.update_for_width(width, &settings.0.responsive) {
        tracing::info!(width, scale = ?active.scale, factor = active.factor, "Model scale changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::{rotate_model, ModelLoadStatus, ShowroomModel};

    fn window_of_width(width: f32) -> Window {
        let mut window = Window::default();
        window.resolution.set(width, 800.0);
        window
    }

    fn resize(app: &mut App, window: Entity, width: f32) {
        app.world_mut()
            .get_mut::<Window>(window)
            .unwrap()
            .resolution
            .set(width, 800.0);
        app.update();
    }

    fn windowed_app(width: f32) -> (App, Entity, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ShowroomSettings>()
            .init_resource::<ActiveScale>()
            .add_systems(PreStartup, select_initial_scale)
            .add_systems(Update, (select_scale_on_resize, rotate_model).chain());

        let window = app
            .world_mut()
            .spawn((window_of_width(width), PrimaryWindow))
            .id();
        let model = app
            .world_mut()
            .spawn((ShowroomModel::default(), Transform::default(), ModelLoadStatus::Ready))
            .id();

        app.update();
        (app, window, model)
    }

    fn model_scale(app: &App, model: Entity) -> Vec3 {
        app.world().get::<Transform>(model).unwrap().scale
    }

    #[test]
    fn test_initial_scale_from_primary_window() {
        let (app, _, model) = windowed_app(1200.0);

        let active = *app.world().resource::<ActiveScale>();
        assert_eq!(active.scale, ViewportScale::Full);
        assert_eq!(active.factor, 0.2);
        assert_eq!(active.width, Some(1200.0));
        assert_eq!(model_scale(&app, model), Vec3::splat(0.2));
    }

    #[test]
    fn test_compact_window_at_startup() {
        let (app, _, model) = windowed_app(599.0);

        assert_eq!(app.world().resource::<ActiveScale>().scale, ViewportScale::Compact);
        assert_eq!(model_scale(&app, model), Vec3::splat(0.12));
    }

    #[test]
    fn test_resize_reselects_and_reaches_model() {
        let (mut app, window, model) = windowed_app(1200.0);

        resize(&mut app, window, 599.0);
        let active = *app.world().resource::<ActiveScale>();
        assert_eq!(active.scale, ViewportScale::Compact);
        assert_eq!(active.factor, 0.12);
        assert_eq!(model_scale(&app, model), Vec3::splat(0.12));

        resize(&mut app, window, 600.0);
        let active = *app.world().resource::<ActiveScale>();
        assert_eq!(active.scale, ViewportScale::Medium);
        assert_eq!(active.factor, 0.18);
        assert_eq!(model_scale(&app, model), Vec3::splat(0.18));

        resize(&mut app, window, 900.0);
        assert_eq!(app.world().resource::<ActiveScale>().factor, 0.2);
        assert_eq!(model_scale(&app, model), Vec3::splat(0.2));
    }

    #[test]
    fn test_height_only_change_keeps_scale() {
        let (mut app, window, model) = windowed_app(599.0);

        app.world_mut()
            .get_mut::<Window>(window)
            .unwrap()
            .resolution
            .set(599.0, 400.0);
        app.update();

        let active = *app.world().resource::<ActiveScale>();
        assert_eq!(active.scale, ViewportScale::Compact);
        assert_eq!(active.width, Some(599.0));
        assert_eq!(model_scale(&app, model), Vec3::splat(0.12));
    }

    #[test]
    fn test_update_reports_changes() {
        let thresholds = ScaleThresholds::default();
        let mut active = ActiveScale::default();

        assert!(!active.update_for_width(1200.0, &thresholds));
        assert!(active.update_for_width(599.0, &thresholds));
        assert_eq!(active.scale, ViewportScale::Compact);
        assert_eq!(active.factor, 0.12);

        assert!(active.update_for_width(600.0, &thresholds));
        assert_eq!(active.factor, 0.18);
        assert!(!active.update_for_width(899.0, &thresholds));
        assert!(active.update_for_width(900.0, &thresholds));
        assert_eq!(active.factor, 0.2);
        assert_eq!(active.width, Some(900.0));
    }
}
