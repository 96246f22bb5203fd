//! Fan-out of one progress value onto every surface.

use crate::progress::ProgressFrame;
use crate::surfaces::{AppsSurface, Host, Workspace};
use pullsheet_animation::Easing;
use pullsheet_ui_graphics::Color;

/// Writes the visual state implied by a [`ProgressFrame`].
///
/// Holds the colours captured when a pull starts and the light status bar
/// latch; everything else is derived from the frame.
#[derive(Clone, Debug)]
pub struct VisualBinder {
    accelerate: Easing,
    parallax_coefficient: f32,
    apps_background_color: Color,
    hotseat_background_color: Color,
    status_bar_height: f32,
    light_status_bar: bool,
}

impl VisualBinder {
    pub fn new(apps_background_color: Color, parallax_coefficient: f32) -> Self {
        Self {
            accelerate: Easing::AccelerateEasing(1.0),
            parallax_coefficient,
            apps_background_color,
            hotseat_background_color: Color::TRANSPARENT,
            status_bar_height: 0.0,
            light_status_bar: false,
        }
    }

    pub fn capture_hotseat_background(&mut self, color: Color) {
        self.hotseat_background_color = color;
    }

    pub fn hotseat_background_color(&self) -> Color {
        self.hotseat_background_color
    }

    pub fn set_status_bar_height(&mut self, height: f32) {
        self.status_bar_height = height;
    }

    pub fn status_bar_height(&self) -> f32 {
        self.status_bar_height
    }

    pub fn is_light_status_bar(&self) -> bool {
        self.light_status_bar
    }

    /// Opacity factor shared by the hotseat and the workspace.
    pub fn workspace_alpha(&self, frame: &ProgressFrame) -> f32 {
        self.accelerate.transform(frame.clamped())
    }

    /// Reveal colour blended from the hotseat background to the apps one.
    pub fn reveal_color(&self, frame: &ProgressFrame) -> Color {
        Color::lerp(
            self.hotseat_background_color,
            self.apps_background_color,
            frame.apps_alpha(),
        )
    }

    pub fn apply_apps(&self, frame: &ProgressFrame, apps: &mut dyn AppsSurface) {
        apps.set_translation_y(frame.shift_current);
        apps.set_content_alpha(frame.apps_alpha());
        apps.set_reveal_color(self.reveal_color(frame));
    }

    pub fn apply_hotseat(
        &self,
        frame: &ProgressFrame,
        vertical_bar_layout: bool,
        workspace: &mut dyn Workspace,
    ) {
        let translation = if vertical_bar_layout {
            self.parallax_coefficient * frame.hotseat_shift()
        } else {
            frame.hotseat_shift()
        };
        workspace.set_hotseat_translation_and_alpha(translation, self.workspace_alpha(frame));
    }

    pub fn apply_workspace(&self, frame: &ProgressFrame, workspace: &mut dyn Workspace) {
        workspace.set_workspace_translation_and_alpha(
            self.parallax_coefficient * frame.hotseat_shift(),
            self.workspace_alpha(frame),
        );
    }

    /// Light status bar while the apps surface sits under it. Landscape never
    /// touches the flag.
    pub fn update_light_status_bar(
        &mut self,
        shift_current: f32,
        vertical_bar_layout: bool,
        host: &mut dyn Host,
    ) {
        if vertical_bar_layout {
            return;
        }
        let enable = shift_current <= self.status_bar_height / 2.0;
        if self.light_status_bar == enable {
            return;
        }
        host.set_light_status_bar(enable);
        self.light_status_bar = enable;
    }
}

#[cfg(test)]
#[path = "tests/visuals_tests.rs"]
mod tests;
