//! Bevy application setup

use bevy::prelude::*;
use bevy::winit::WinitSettings;
use bevy_egui::EguiPlugin;
use bevy_picking::DefaultPickingPlugins;
use showroom_core::ShowroomConfig;
use showroom_scene::{ShowroomScenePlugin, ShowroomSettings};

use crate::audio::AmbientAudioPlugin;
use crate::loading::LoadingPlugin;
use crate::ui::UiPlugin;

/// Canvas the web build renders into
const CANVAS_SELECTOR: &str = "#showroom-canvas";

/// Asset root: the page root on the web, `assets/` next to the binary natively
#[cfg(target_arch = "wasm32")]
const ASSET_ROOT: &str = "";
#[cfg(not(target_arch = "wasm32"))]
const ASSET_ROOT: &str = "assets";

/// Run the Bevy application
pub fn run(config: ShowroomConfig) {
    tracing::info!(
        model = %config.model.path,
        audio = %config.audio.path,
        "Starting showroom"
    );

    App::new()
        // The model turns every frame, so render continuously
        .insert_resource(WinitSettings::default())
        .insert_resource(ShowroomSettings(config))
        .add_plugins(DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Showroom".to_string(),
                    canvas: Some(CANVAS_SELECTOR.to_string()),
                    fit_canvas_to_parent: true,
                    prevent_default_event_handling: false,
                    ..default()
                }),
                ..default()
            })
            .set(AssetPlugin {
                file_path: ASSET_ROOT.to_string(),
                // Static hosting has no .meta files
                meta_check: bevy::asset::AssetMetaCheck::Never,
                ..default()
            })
        )
        // bevy_egui looks for the picking plugin from the bevy_picking crate,
        // so it must be added before EguiPlugin
        .add_plugins(DefaultPickingPlugins)
        .add_plugins(EguiPlugin::default())
        .add_plugins(ShowroomScenePlugin)
        .add_plugins(LoadingPlugin)
        .add_plugins(AmbientAudioPlugin)
        .add_plugins(UiPlugin)
        .run();
}
