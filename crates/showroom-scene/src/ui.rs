//! Shared egui widgets for the showroom overlay

use bevy_egui::egui;
use showroom_core::{LoadingState, Readout};

/// Render the row of vehicle statistics
pub fn render_readout_panel(ui: &mut egui::Ui, readouts: &[Readout], compact: bool) {
    let value_size = if compact { 16.0 } else { 22.0 };

    ui.horizontal(|ui| {
        for (i, readout) in readouts.iter().enumerate() {
            if i > 0 {
                ui.separator();
            }
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(readout.icon).size(value_size));
                    ui.label(
                        egui::RichText::new(readout.display_value())
                            .size(value_size)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                });
                ui.label(
                    egui::RichText::new(readout.label)
                        .small()
                        .color(egui::Color32::GRAY),
                );
            });
        }
    });
}

/// Render the loading progress bar with its percentage
pub fn render_progress(ui: &mut egui::Ui, state: &LoadingState, width: f32) {
    let fraction = f32::from(state.percent) / 100.0;
    ui.add(
        egui::ProgressBar::new(fraction)
            .desired_width(width)
            .text(format!("{}%", state.percent)),
    );
}
