// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Navigation and persistence controls.
//!
//! This module provides the toolbar with image navigation, save, and
//! export buttons plus the status line.

/// Result of toolbar interaction for one frame.
pub enum ToolbarAction {
    None,
    Previous,
    Next,
    Save,
    Export,
}

/// Display the toolbar. Navigation buttons are disabled at the sequence
/// bounds rather than erroring.
pub fn show(
    ui: &mut egui::Ui,
    at_first: bool,
    at_last: bool,
    image_label: &str,
    status: Option<&str>,
) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui
            .add_enabled(!at_first, egui::Button::new("⏴ Previous"))
            .clicked()
        {
            action = ToolbarAction::Previous;
        }
        if ui
            .add_enabled(!at_last, egui::Button::new("Next ⏵"))
            .clicked()
        {
            action = ToolbarAction::Next;
        }

        ui.separator();
        ui.label(image_label);
        ui.separator();

        if ui.button("Save").clicked() {
            action = ToolbarAction::Save;
        }
        if ui.button("Export...").clicked() {
            action = ToolbarAction::Export;
        }

        if let Some(status) = status {
            ui.separator();
            ui.label(egui::RichText::new(status).italics().weak());
        }
    });

    action
}
