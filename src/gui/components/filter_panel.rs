// src/gui/components/filter_panel.rs
//
// Left panel: league, season and the stat filter form.

use eframe::egui;

use crate::{
    config::{
        consts::POSITIONS,
        options::{AgeFilter, League, CATEGORIES, PRESET_TABS, parse_positions},
    },
    gui::app::App,
};

const VENUES: [&str; 3] = ["Overall", "Home", "Away"];
const CURRENT_VIEW: &str = "(current view)";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let enabled = !app.is_running();
    ui.add_enabled_ui(enabled, |ui| {
        ui.heading("Scrape");
        ui.add_space(4.0);

        let scrape = &mut app.state.options.scrape;

        // --- League ---
        let before = scrape.league;
        egui::ComboBox::from_label("League")
            .selected_text(scrape.league.label())
            .show_ui(ui, |ui| {
                for league in League::ALL {
                    ui.selectable_value(&mut scrape.league, league, league.label());
                }
            });
        if scrape.league != before {
            logf!("UI: League → {}", scrape.league);
        }

        // --- Season ---
        ui.horizontal(|ui| {
            ui.label("Season:");
            ui.add(egui::TextEdit::singleline(&mut scrape.season).desired_width(60.0));
        });

        ui.separator();

        // --- Filter choice ---
        let form = &mut app.state.gui.filter_form;
        let shown = if form.choice.trim().is_empty() { CURRENT_VIEW } else { form.choice.as_str() };
        let mut choice = s!(shown);
        egui::ComboBox::from_label("Filter")
            .selected_text(shown)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut choice, s!(CURRENT_VIEW), CURRENT_VIEW);
                for tab in PRESET_TABS {
                    ui.selectable_value(&mut choice, s!(tab), tab);
                }
                ui.selectable_value(&mut choice, s!("Detailed"), "Detailed");
            });
        let choice = if choice == CURRENT_VIEW { s!() } else { choice };
        if choice != form.choice {
            logf!("UI: Filter → {choice:?}");
            form.choice = choice;
        }

        if form.is_detailed() {
            ui.add_space(4.0);
            egui::Grid::new("detailed_form").num_columns(2).spacing([8.0, 4.0]).show(ui, |ui| {
                ui.label("Venue");
                egui::ComboBox::from_id_salt("venue")
                    .selected_text(form.venue.as_str())
                    .show_ui(ui, |ui| {
                        for v in VENUES {
                            ui.selectable_value(&mut form.venue, s!(v), v);
                        }
                    });
                ui.end_row();

                ui.label("Age");
                ui.horizontal(|ui| {
                    egui::ComboBox::from_id_salt("age_kind")
                        .selected_text(form.age_kind.as_str())
                        .show_ui(ui, |ui| {
                            for k in AgeFilter::KINDS {
                                ui.selectable_value(&mut form.age_kind, s!(k), k);
                            }
                        });
                    if !form.age_kind.eq_ignore_ascii_case("all") {
                        ui.add(egui::TextEdit::singleline(&mut form.age_value).desired_width(36.0));
                    }
                });
                ui.end_row();

                ui.label("Positions");
                ui.horizontal(|ui| {
                    let mut selected = parse_positions(&form.positions);
                    let mut changed = false;
                    for p in POSITIONS {
                        let mut on = selected.iter().any(|s| s == p);
                        if ui.checkbox(&mut on, p).changed() {
                            changed = true;
                            if on { selected.push(s!(p)) } else { selected.retain(|s| s != p) }
                        }
                    }
                    if changed {
                        // keep site order G, D, M, F
                        let ordered: Vec<&str> =
                            POSITIONS.iter().copied().filter(|p| selected.iter().any(|s| s == *p)).collect();
                        form.positions = ordered.join(",");
                    }
                });
                ui.end_row();

                ui.label("Category");
                egui::ComboBox::from_id_salt("category")
                    .selected_text(form.category.as_str())
                    .show_ui(ui, |ui| {
                        for c in CATEGORIES {
                            ui.selectable_value(&mut form.category, s!(c), c);
                        }
                    });
                ui.end_row();

                ui.label("Sub-filters");
                ui.add(
                    egui::TextEdit::multiline(&mut form.sub_filters)
                        .desired_rows(2)
                        .desired_width(160.0)
                        .hint_text("comma separated, max 5"),
                );
                ui.end_row();
            });
        }

        if let Some(err) = &app.form_error {
            ui.colored_label(egui::Color32::from_rgb(220, 30, 30), err);
        }
    });
}
