use egui::{Button, Ui};
use useradmin_business::PageButton;
use useradmin_business::users::Pagination;

pub const FIRST_LABEL: &str = "« First";
pub const PREV_LABEL: &str = "‹ Prev";
pub const NEXT_LABEL: &str = "Next ›";
pub const LAST_LABEL: &str = "Last »";

/// First / prev / label / next / last. Hidden for a single page.
///
/// Returns the page to navigate to when a button was clicked.
pub fn pagination_bar(ui: &mut Ui, pagination: &Pagination) -> Option<u32> {
    let controls = pagination.controls()?;
    let mut target = None;

    let mut nav_button = |ui: &mut Ui, label: &str, button: PageButton| {
        if ui.add_enabled(button.enabled, Button::new(label)).clicked() {
            target = Some(button.target);
        }
    };

    ui.horizontal(|ui| {
        nav_button(ui, FIRST_LABEL, controls.first);
        nav_button(ui, PREV_LABEL, controls.prev);
        ui.label(&controls.label);
        nav_button(ui, NEXT_LABEL, controls.next);
        nav_button(ui, LAST_LABEL, controls.last);
    });

    target
}
