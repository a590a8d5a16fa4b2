//! Shared color constants for the UI.

use egui::Color32;
use useradmin_business::ToastKind;
use useradmin_business::prefs::HexColor;
use useradmin_business::users::{Role, UserStatus};

/// Forest green color for active/success status.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for error/destructive actions.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber color for admin badges and warnings.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

pub const COLOR_BLUE: Color32 = Color32::from_rgb(13, 110, 253);

pub const COLOR_GRAY: Color32 = Color32::from_rgb(108, 117, 125);

/// Subtle gray for table borders.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

pub fn hex_to_color32(color: HexColor) -> Color32 {
    Color32::from_rgb(color.r(), color.g(), color.b())
}

pub fn role_color(role: Role) -> Color32 {
    match role {
        Role::SuperAdmin => COLOR_RED,
        Role::Admin => COLOR_AMBER,
        Role::User => COLOR_BLUE,
    }
}

pub fn status_color(status: UserStatus) -> Color32 {
    if status.is_active() {
        COLOR_GREEN
    } else {
        COLOR_GRAY
    }
}

pub fn toast_color(kind: ToastKind) -> Color32 {
    match kind {
        ToastKind::Info => COLOR_BLUE,
        ToastKind::Success => COLOR_GREEN,
        ToastKind::Error => COLOR_RED,
    }
}
