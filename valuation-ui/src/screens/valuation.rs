use egui::Ui;

use valuation_core::{FieldId, FieldKind, GROUPS, Options, geo};

use crate::app::ValuatorApp;
use crate::widgets;

/// The single form screen: grouped inputs, error panel, submit, result.
pub struct ValuationScreen;

impl ValuationScreen {
    /// Width cap so the form stays readable on wide windows.
    const GROUP_WIDTH: f32 = 560.0;
    /// Label column width for alignment.
    const LABEL_WIDTH: f32 = 210.0;
    /// Input column width.
    const INPUT_WIDTH: f32 = 260.0;

    pub fn show(app: &mut ValuatorApp, ui: &mut Ui) {
        ui.heading("تقييم العقار");
        ui.label("أدخل بيانات العقار للحصول على تقييم فوري");
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            let group_width = ui.available_width().min(Self::GROUP_WIDTH);

            for group in GROUPS {
                ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                    ui.group(|ui| {
                        ui.set_min_width(group_width - 20.0);
                        ui.heading(group.title);
                        ui.add_space(5.0);

                        egui::Grid::new(group.title)
                            .num_columns(2)
                            .spacing([10.0, 8.0])
                            .show(ui, |ui| {
                                for &field in group.fields {
                                    Self::field_row(app, ui, field);
                                }
                            });
                    });
                });
                ui.add_space(10.0);
            }

            if let Some(error) = app.error.clone() {
                ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                    ui.group(|ui| {
                        ui.set_min_width(group_width - 20.0);
                        ui.colored_label(egui::Color32::RED, error);
                    });
                });
                ui.add_space(10.0);
            }

            ui.horizontal(|ui| {
                let label = if app.busy() {
                    "جاري التقييم..."
                } else {
                    "احصل على التقييم"
                };
                if ui.add_enabled(!app.busy(), egui::Button::new(label)).clicked() {
                    app.submit();
                }
            });

            if let Some(valuation) = app.result {
                ui.add_space(20.0);
                ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                    widgets::result_panel(ui, &valuation);
                });
            }

            ui.add_space(20.0);
        });
    }

    /// One grid row: right-aligned label, then the input the field's
    /// descriptor calls for.
    fn field_row(app: &mut ValuatorApp, ui: &mut Ui, field: FieldId) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.set_min_width(Self::LABEL_WIDTH);
            ui.label(egui::RichText::new(format!("{} *", field.label())).strong());
        });

        match field.kind() {
            FieldKind::Text | FieldKind::Number => {
                ui.add(
                    egui::TextEdit::singleline(app.form.field_mut(field))
                        .desired_width(Self::INPUT_WIDTH)
                        .hint_text(format!("أدخل {}", field.label())),
                );
            }
            FieldKind::Select(options) => Self::select_row(app, ui, field, options),
        }

        ui.end_row();
    }

    fn select_row(app: &mut ValuatorApp, ui: &mut Ui, field: FieldId, options: Options) {
        let (placeholder, items): (&str, &[&str]) = match options {
            Options::Regions => ("اختر المنطقة", geo::REGIONS.as_slice()),
            Options::CitiesOfRegion => {
                ("اختر المدينة", geo::cities(app.form.get(FieldId::Region)))
            }
            Options::AssetTypes => ("اختر نوع العقار", geo::ASSET_TYPES.as_slice()),
            Options::AssetLevels => ("اختر مستوى العقار", geo::ASSET_LEVELS.as_slice()),
        };

        // The city select stays disabled until a region narrows its options.
        let enabled = !items.is_empty() || !matches!(options, Options::CitiesOfRegion);

        let current = app.form.get(field).to_string();
        let selected_text = if current.is_empty() {
            placeholder.to_string()
        } else {
            current.clone()
        };

        ui.add_enabled_ui(enabled, |ui| {
            egui::ComboBox::from_id_salt(field.wire_name())
                .width(Self::INPUT_WIDTH)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for &item in items {
                        if ui.selectable_label(current == item, item).clicked() {
                            app.form.set(field, item);
                        }
                    }
                });
        });
    }
}
