//! Blocking dialogs for editing and deleting one user.

use adminui_business::{EditField, UserTableAction, UserTableState};
use egui::{Color32, Id, Modal, RichText, TextEdit, Ui};

/// Width of the edit form inputs.
const INPUT_WIDTH: f32 = 240.0;

/// Shows the delete confirmation while a delete target is pending.
pub fn delete_confirmation_modal(
    state: &UserTableState,
    ui: &mut Ui,
    actions: &mut Vec<UserTableAction>,
) {
    let Some(target) = state.delete_session().target() else {
        return;
    };

    let modal = Modal::new(Id::new("delete_confirmation_modal")).show(ui.ctx(), |ui| {
        ui.heading("Delete Confirmation");
        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label("Are you sure you want to delete");
            ui.label(RichText::new(format!("{}?", target.name)).strong());
        });

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui.button("Cancel").clicked() {
                actions.push(UserTableAction::CancelDelete);
            }
            if ui
                .button(RichText::new("Delete").color(Color32::from_rgb(220, 53, 69)))
                .clicked()
            {
                actions.push(UserTableAction::ConfirmDelete);
            }
        });
    });

    if modal.should_close() {
        actions.push(UserTableAction::CancelDelete);
    }
}

/// Shows the edit form while an edit session is open.
pub fn edit_user_modal(state: &UserTableState, ui: &mut Ui, actions: &mut Vec<UserTableAction>) {
    let session = state.edit_session();
    let Some(buffer) = session.buffer() else {
        return;
    };

    let modal = Modal::new(Id::new("edit_user_modal")).show(ui.ctx(), |ui| {
        ui.heading("Edit User");
        ui.add_space(8.0);

        egui::Grid::new("edit_user_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("ID:");
                let mut id = buffer.id().as_str();
                ui.add(TextEdit::singleline(&mut id).desired_width(INPUT_WIDTH));
                ui.end_row();

                for field in EditField::ALL {
                    ui.label(format!("{}:", field.label()));
                    let mut value = buffer.field(field).to_owned();
                    if ui
                        .add(TextEdit::singleline(&mut value).desired_width(INPUT_WIDTH))
                        .changed()
                    {
                        actions.push(UserTableAction::EditField(field, value));
                    }
                    ui.end_row();
                }
            });

        if let Some(error) = session.error() {
            ui.add_space(8.0);
            ui.colored_label(Color32::RED, error.to_string());
        }

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui.button("Cancel").clicked() {
                actions.push(UserTableAction::CancelEdit);
            }
            if ui.button("Update").clicked() {
                actions.push(UserTableAction::SaveEdit);
            }
        });
    });

    if modal.should_close() {
        actions.push(UserTableAction::CancelEdit);
    }
}
