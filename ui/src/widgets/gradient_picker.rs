use egui::Ui;
use useradmin_business::prefs::{HeaderGradient, HexColor, PreferenceStore, UiPreferences};

pub const RESET_LABEL: &str = "Reset layout";

/// Two color pickers for the header gradient and a reset for colors and column widths.
pub fn gradient_picker(ui: &mut Ui, prefs: &mut UiPreferences, store: &mut dyn PreferenceStore) {
    ui.horizontal(|ui| {
        ui.label("Header colors");

        let mut start = channels(prefs.gradient.start);
        let mut end = channels(prefs.gradient.end);
        let mut changed = ui
            .color_edit_button_srgb(&mut start)
            .on_hover_text("Gradient start")
            .changed();
        changed |= ui
            .color_edit_button_srgb(&mut end)
            .on_hover_text("Gradient end")
            .changed();
        if changed {
            let gradient = HeaderGradient {
                start: HexColor::rgb(start[0], start[1], start[2]),
                end: HexColor::rgb(end[0], end[1], end[2]),
            };
            prefs.set_gradient(gradient, store);
        }

        if ui
            .button(RESET_LABEL)
            .on_hover_text("Restore default colors and column widths")
            .clicked()
        {
            prefs.reset(store);
        }
    });
}

fn channels(color: HexColor) -> [u8; 3] {
    [color.r(), color.g(), color.b()]
}
