//! Loading screen timing

use bevy::prelude::*;
use showroom_core::{LoadingSequencer, LoadingUpdate};
use showroom_scene::ShowroomSettings;

/// Loading overlay state, driven by real (unscaled) time
#[derive(Resource, Debug)]
pub struct LoadingScreen {
    pub sequencer: LoadingSequencer,
}

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start_loading)
            .add_systems(Update, advance_loading)
            .add_systems(Last, teardown_loading_on_exit);
    }
}

fn start_loading(mut commands: Commands, settings: Res<ShowroomSettings>) {
    let sequencer = LoadingSequencer::start(settings.0.loading.settings());
    commands.insert_resource(LoadingScreen { sequencer });
}

fn advance_loading(time: Res<Time<Real>>, screen: Option<ResMut<LoadingScreen>>) {
    let Some(mut screen) = screen else { return };

    // Avoid marking the resource changed once the timers are gone
    if !screen.sequencer.is_armed() {
        return;
    }

    if let LoadingUpdate::Completed = screen.sequencer.advance(time.delta()) {
        tracing::info!("Loading overlay dismissed");
    }
}

fn teardown_loading_on_exit(
    mut exits: MessageReader<AppExit>,
    screen: Option<ResMut<LoadingScreen>>,
) {
    if exits.read().next().is_none() {
        return;
    }
    if let Some(mut screen) = screen {
        screen.sequencer.teardown();
    }
}
