//! The admin user table: search, alert, table, page bar, bulk delete and dialogs.

use adminui_business::{LoadStatus, UserTableAction, UserTableState};
use adminui_states::Store;
use egui::{Button, Color32, Frame, Margin, Response, RichText, TextEdit, Ui};

use super::modals::{delete_confirmation_modal, edit_user_modal};
use super::pagination::page_bar;
use super::table::users_table;

/// Background of the load error alert.
const ALERT_BG_COLOR: Color32 = Color32::from_rgb(248, 215, 218);

/// Text color of the load error alert.
const ALERT_TEXT_COLOR: Color32 = Color32::from_rgb(114, 28, 36);

/// Renders the user table and applies whatever the user did this frame.
pub fn user_table_panel(store: &mut Store<UserTableState>, ui: &mut Ui) -> Response {
    // Collected while rendering, dispatched once the state is no longer borrowed.
    let mut actions = Vec::new();
    let state = store.state();

    let response = ui
        .vertical(|ui| {
            search_bar(state, ui, &mut actions);

            if let Some(message) = state.error_message() {
                ui.add_space(8.0);
                error_alert(message, ui);
            }

            if state.load_status() == LoadStatus::Loading {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading...");
                });
            }

            ui.add_space(8.0);
            users_table(state, ui, &mut actions);

            ui.add_space(8.0);
            page_bar(&state.page_controls(), state.current_page(), ui, &mut actions);

            ui.add_space(8.0);
            let has_selection = !state.selection().is_empty();
            if ui
                .add_enabled(
                    has_selection,
                    Button::new(RichText::new("Delete Selected").color(Color32::WHITE))
                        .fill(Color32::from_rgb(220, 53, 69)),
                )
                .clicked()
            {
                actions.push(UserTableAction::DeleteSelected);
            }
        })
        .response;

    edit_user_modal(state, ui, &mut actions);
    delete_confirmation_modal(state, ui, &mut actions);

    for action in actions {
        store.dispatch(action);
    }

    response
}

fn search_bar(state: &UserTableState, ui: &mut Ui, actions: &mut Vec<UserTableAction>) {
    let mut search = state.search().to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut search)
            .hint_text("Search")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        actions.push(UserTableAction::SetSearch(search));
    }
}

fn error_alert(message: &str, ui: &mut Ui) {
    Frame::NONE
        .fill(ALERT_BG_COLOR)
        .inner_margin(Margin::symmetric(12, 8))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.label(RichText::new(message).color(ALERT_TEXT_COLOR));
        });
}
