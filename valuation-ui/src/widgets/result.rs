use egui::{Response, RichText, Ui};

use valuation_core::Valuation;

use crate::utils::format_amount;

/// Renders the valuation result panel. Purely presentational; the value
/// is owned by the app and only read here.
pub fn result_panel(ui: &mut Ui, valuation: &Valuation) -> Response {
    ui.group(|ui| {
        ui.vertical_centered(|ui| {
            ui.heading("نتيجة التقييم");
            ui.add_space(5.0);
            ui.label(
                RichText::new(format!("{} ريال", format_amount(valuation.prediction)))
                    .strong()
                    .size(24.0),
            );
        });
    })
    .response
}
