//! Ambient audio track
//!
//! The track is spawned paused and looping. The [`AudioController`] in
//! [`AmbientAudio`] is the source of truth; each frame the sink is brought in
//! line with it, which also covers clicks that land before the sink exists.

use bevy::audio::{PlaybackMode, Volume};
use bevy::prelude::*;
use showroom_core::{AudioCommand, AudioController, PlaybackState};
use showroom_scene::ShowroomSettings;

/// Marker for the ambient track entity
#[derive(Component)]
pub struct AmbientTrack;

/// Playback state owned by the page
#[derive(Resource, Debug, Default)]
pub struct AmbientAudio {
    pub controller: AudioController,
}

impl AmbientAudio {
    /// Handle a click on the audio toggle
    pub fn toggle(&mut self) -> AudioCommand {
        let command = self.controller.toggle();
        tracing::info!(?command, "Ambient audio toggled");
        command
    }
}

pub struct AmbientAudioPlugin;

impl Plugin for AmbientAudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AmbientAudio>()
            .add_systems(Startup, spawn_ambient_track)
            .add_systems(Update, sync_audio_sink)
            .add_systems(Last, teardown_audio_on_exit);
    }
}

fn spawn_ambient_track(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<ShowroomSettings>,
) {
    let audio = &settings.0.audio;
    let mode = if audio.looping {
        PlaybackMode::Loop
    } else {
        PlaybackMode::Once
    };

    commands.spawn((
        AudioPlayer::new(asset_server.load(audio.path.clone())),
        PlaybackSettings {
            mode,
            paused: true,
            volume: Volume::Linear(audio.volume),
            ..default()
        },
        AmbientTrack,
    ));
    tracing::debug!("Ambient track queued: {}", audio.path);
}

/// Calls needed to bring a sink in line with the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SinkActions {
    pub play: bool,
    /// `Some(muted)` when the sink's mute flag must change
    pub set_muted: Option<bool>,
}

/// Decide what to do to a sink that is currently `paused` / `muted`
pub fn sink_actions(state: PlaybackState, paused: bool, muted: bool) -> SinkActions {
    if !state.started {
        return SinkActions::default();
    }

    SinkActions {
        play: paused,
        set_muted: (muted != state.muted).then_some(state.muted),
    }
}

/// Bring the sink in line with the controller
fn sync_audio_sink(
    audio: Res<AmbientAudio>,
    mut sinks: Query<&mut AudioSink, With<AmbientTrack>>,
) {
    let state = audio.controller.state();

    for mut sink in &mut sinks {
        let actions = sink_actions(state, sink.is_paused(), sink.is_muted());
        if actions.play {
            sink.play();
        }
        match actions.set_muted {
            Some(true) => sink.mute(),
            Some(false) => sink.unmute(),
            None => {}
        }
    }
}

/// Stop and drop the track so nothing keeps playing after the view is gone
fn teardown_audio_on_exit(
    mut commands: Commands,
    mut exits: MessageReader<AppExit>,
    mut audio: ResMut<AmbientAudio>,
    tracks: Query<(Entity, Option<&AudioSink>), With<AmbientTrack>>,
) {
    if exits.read().next().is_none() {
        return;
    }

    let command = audio.controller.teardown();
    for (entity, sink) in &tracks {
        if let Some(sink) = sink {
            sink.stop();
        }
        commands.entity(entity).despawn();
    }
    tracing::debug!(?command, "Ambient audio torn down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_delegates_to_controller() {
        let mut audio = AmbientAudio::default();
        assert_eq!(audio.toggle(), AudioCommand::Start);
        assert_eq!(audio.toggle(), AudioCommand::Mute);
        assert!(audio.controller.is_muted());
        assert!(audio.controller.is_playing());
    }

    #[test]
    fn test_idle_leaves_sink_alone() {
        let idle = AudioController::new().state();
        assert_eq!(sink_actions(idle, true, false), SinkActions::default());
        assert_eq!(sink_actions(idle, true, true), SinkActions::default());
    }

    #[test]
    fn test_first_toggle_plays_unmuted() {
        let mut audio = AmbientAudio::default();
        audio.toggle();

        let actions = sink_actions(audio.controller.state(), true, false);
        assert_eq!(actions, SinkActions { play: true, set_muted: None });

        // A sink spawned muted is unmuted as well
        let actions = sink_actions(audio.controller.state(), true, true);
        assert_eq!(actions, SinkActions { play: true, set_muted: Some(false) });
    }

    #[test]
    fn test_later_toggles_only_flip_mute() {
        let mut audio = AmbientAudio::default();
        audio.toggle();

        audio.toggle();
        let actions = sink_actions(audio.controller.state(), false, false);
        assert_eq!(actions, SinkActions { play: false, set_muted: Some(true) });

        audio.toggle();
        let actions = sink_actions(audio.controller.state(), false, true);
        assert_eq!(actions, SinkActions { play: false, set_muted: Some(false) });

        // Already in line: nothing to do
        assert_eq!(
            sink_actions(audio.controller.state(), false, false),
            SinkActions::default()
        );
    }

    #[test]
    fn test_exit_tears_down_controller() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<AmbientAudio>()
            .add_systems(Last, teardown_audio_on_exit);

        app.world_mut().resource_mut::<AmbientAudio>().toggle();
        let track = app.world_mut().spawn(AmbientTrack).id();

        app.world_mut().write_message(AppExit::Success);
        app.update();

        let audio = app.world().resource::<AmbientAudio>();
        assert!(!audio.controller.is_playing());
        assert!(audio.controller.is_muted());
        assert!(app.world().get_entity(track).is_err());
    }
}
