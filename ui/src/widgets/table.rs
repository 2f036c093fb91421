//! The users grid.
//!
//! Rendered with `egui::Grid` so row widgets receive clicks like any other widget.

use adminui_business::{UserRecord, UserTableAction, UserTableState};
use egui::{Color32, Frame, InnerResponse, Margin, RichText, Stroke, Ui};

/// Border color of the table frame.
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color.
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Background of checked rows.
const SELECTED_ROW_COLOR: Color32 = Color32::from_rgb(222, 235, 255);

/// Column titles after the checkbox column.
pub const COLUMNS: [&str; 5] = ["ID", "Name", "Email", "Role", "Action"];

fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

fn data_cell<R>(
    ui: &mut Ui,
    selected: bool,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    let fill = if selected {
        SELECTED_ROW_COLOR
    } else {
        Color32::TRANSPARENT
    };
    Frame::NONE
        .fill(fill)
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Renders the current page, pushing user intents into `actions`.
pub fn users_table(state: &UserTableState, ui: &mut Ui, actions: &mut Vec<UserTableAction>) {
    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            egui::Grid::new("users_table")
                .num_columns(COLUMNS.len() + 1)
                .striped(true)
                .spacing([16.0, 0.0])
                .min_col_width(40.0)
                .show(ui, |ui| {
                    header_cell(ui, |ui| {
                        let mut all = state.header_checked();
                        if ui
                            .checkbox(&mut all, "")
                            .on_hover_text("Select all on this page")
                            .changed()
                        {
                            actions.push(UserTableAction::ToggleVisibleRows);
                        }
                    });
                    for title in COLUMNS {
                        header_cell(ui, |ui| {
                            ui.strong(title);
                        });
                    }
                    ui.end_row();

                    for record in state.visible() {
                        user_row(record, state.is_selected(&record.id), ui, actions);
                        ui.end_row();
                    }
                });
        });

    if state.visible().is_empty() && state.error_message().is_none() {
        ui.add_space(4.0);
        ui.weak("No users");
    }
}

fn user_row(
    record: &UserRecord,
    selected: bool,
    ui: &mut Ui,
    actions: &mut Vec<UserTableAction>,
) {
    data_cell(ui, selected, |ui| {
        let mut checked = selected;
        if ui.checkbox(&mut checked, "").changed() {
            actions.push(UserTableAction::ToggleRow(record.id));
        }
    });

    for text in [
        record.id.as_str(),
        record.name.as_str(),
        record.email.as_str(),
        record.role.as_str(),
    ] {
        data_cell(ui, selected, |ui| {
            let text = RichText::new(text);
            ui.label(if selected { text.strong() } else { text });
        });
    }

    data_cell(ui, selected, |ui| {
        ui.horizontal(|ui| {
            if ui.button("✏").on_hover_text("Edit user").clicked() {
                actions.push(UserTableAction::OpenEdit(record.id));
            }
            if ui.button("🗑").on_hover_text("Delete user").clicked() {
                actions.push(UserTableAction::OpenDelete(record.id));
            }
        });
    });
}
