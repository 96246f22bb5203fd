//! Collaborators the host implements.
//!
//! All of them are called synchronously from the controller and must not
//! call back into it.

use pullsheet_ui_graphics::{Color, EdgeInsets, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceProfile {
    /// Landscape layout with the hotseat in a vertical bar.
    pub is_vertical_bar_layout: bool,
    pub height_px: f32,
}

impl DeviceProfile {
    pub fn portrait(height_px: f32) -> Self {
        Self {
            is_vertical_bar_layout: false,
            height_px,
        }
    }

    pub fn landscape(height_px: f32) -> Self {
        Self {
            is_vertical_bar_layout: true,
            height_px,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionAction {
    Fling,
    Swipe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionDirection {
    Up,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionContainer {
    Hotseat,
}

/// Telemetry record emitted when a gesture opens the apps surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionEvent {
    pub action: TransitionAction,
    pub direction: TransitionDirection,
    pub container: TransitionContainer,
}

impl TransitionEvent {
    pub fn hotseat_up(action: TransitionAction) -> Self {
        Self {
            action,
            direction: TransitionDirection::Up,
            container: TransitionContainer::Hotseat,
        }
    }
}

/// Window-level state and actions of the launcher hosting the controller.
pub trait Host {
    fn is_apps_visible(&self) -> bool;
    fn is_overview_mode(&self) -> bool;
    fn is_widgets_visible(&self) -> bool;
    fn device_profile(&self) -> DeviceProfile;
    fn insets(&self) -> EdgeInsets;
    fn is_event_over_hotseat(&self, position: Point) -> bool;
    fn is_event_over_page_indicator(&self, position: Point) -> bool;

    /// Records the apps surface as the visible state.
    fn show_apps_view(&mut self, animated: bool, update_predicted_apps: bool, focus_search: bool);
    /// Records the workspace as the visible state.
    fn show_workspace(&mut self, animated: bool);
    fn try_and_update_predicted_apps(&mut self);
    fn set_light_status_bar(&mut self, enabled: bool);
    fn log_action_on_container(&mut self, event: TransitionEvent);
}

/// The surface that slides up over the workspace.
pub trait AppsSurface {
    fn set_translation_y(&mut self, translation_y: f32);
    fn set_content_alpha(&mut self, alpha: f32);
    fn set_reveal_color(&mut self, color: Color);
    fn set_visible(&mut self, visible: bool);
    /// Returns the surface to its initial scroll/search state.
    fn reset(&mut self);
    /// `true` when a drag at `position` should move the container rather
    /// than scroll the list inside it.
    fn should_container_scroll(&self, position: Point) -> bool;
}

pub trait Hotseat {
    fn set_visible(&mut self, visible: bool);
    fn background_color(&self) -> Color;
    fn set_background_transparent(&mut self, transparent: bool);
}

pub trait Workspace {
    fn set_hotseat_translation_and_alpha(&mut self, translation_y: f32, alpha: f32);
    fn set_workspace_translation_and_alpha(&mut self, translation_y: f32, alpha: f32);
}

/// The page-indicator caret that points up or down with the gesture.
pub trait CaretController {
    fn on_drag_start(&mut self);
    fn update_caret(&mut self, progress: f32, velocity: f32, dragging: bool);
}
