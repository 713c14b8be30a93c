//! UI overlays using bevy_egui

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use showroom_core::{ViewportScale, READOUTS};
use showroom_scene::ui::{render_progress, render_readout_panel};
use showroom_scene::{ActiveScale, PointerCaptured};

use crate::audio::AmbientAudio;
use crate::loading::LoadingScreen;

/// Overlay background, matches the stage clear color
const OVERLAY_FILL: egui::Color32 = egui::Color32::from_rgb(0x10, 0x10, 0x10);

#[derive(SystemParam)]
pub struct UiParams<'w, 's> {
    pub contexts: EguiContexts<'w, 's>,
    pub loading: Option<Res<'w, LoadingScreen>>,
    pub audio: ResMut<'w, AmbientAudio>,
    pub scale: Res<'w, ActiveScale>,
    pub captured: ResMut<'w, PointerCaptured>,
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Main UI system runs in EguiPrimaryContextPass for proper input handling (bevy_egui 0.38+)
        app.add_systems(EguiPrimaryContextPass, ui_system);
    }
}

fn ui_system(mut params: UiParams) {
    let compact = params.scale.scale == ViewportScale::Compact;
    let loading = params.loading.as_ref().map(|screen| screen.sequencer.state());

    let Ok(ctx) = params.contexts.ctx_mut() else { return };

    match loading {
        Some(state) if state.active => {
            egui::CentralPanel::default()
                .frame(egui::Frame::default().fill(OVERLAY_FILL))
                .show(ctx, |ui| {
                    let bar_width = (ui.available_width() * 0.6).min(420.0);
                    ui.vertical_centered(|ui| {
                        ui.add_space(ui.available_height() * 0.4);
                        ui.heading(
                            egui::RichText::new("Loading showroom")
                                .color(egui::Color32::WHITE),
                        );
                        ui.add_space(12.0);
                        render_progress(ui, &state, bar_width);
                    });
                });
        }
        _ => {
            egui::TopBottomPanel::bottom("readout_panel")
                .frame(egui::Frame::default().inner_margin(egui::Margin::same(12)))
                .show_separator_line(false)
                .show(ctx, |ui| {
                    render_readout_panel(ui, &READOUTS, compact);
                });

            egui::Area::new(egui::Id::new("audio_toggle"))
                .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
                .show(ctx, |ui| {
                    let state = params.audio.controller.state();
                    let icon = if state.started && !state.muted { "🔊" } else { "🔇" };
                    let button = egui::Button::new(egui::RichText::new(icon).size(22.0))
                        .min_size(egui::vec2(44.0, 44.0));
                    if ui.add(button).on_hover_text("Toggle ambient audio").clicked() {
                        params.audio.toggle();
                    }
                });
        }
    }

    let wants_pointer = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
    if params.captured.0 != wants_pointer {
        params.captured.0 = wants_pointer;
    }
}
