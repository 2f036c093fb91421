//! Page bar under the table.

use adminui_business::{PageControls, UserTableAction};
use egui::{Button, Ui};

/// Previous/next arrows around one button per page.
///
/// Renders nothing when there are no pages.
pub fn page_bar(
    controls: &PageControls,
    current: usize,
    ui: &mut Ui,
    actions: &mut Vec<UserTableAction>,
) {
    if controls.is_empty() {
        return;
    }

    ui.horizontal(|ui| {
        if controls.show_prev && ui.button("Previous").clicked() {
            actions.push(UserTableAction::GoToPage(current.saturating_sub(1)));
        }

        for button in &controls.buttons {
            let label = button.number.to_string();
            if ui.add(Button::new(label).selected(button.active)).clicked() {
                actions.push(UserTableAction::GoToPage(button.number));
            }
        }

        if controls.show_next && ui.button("Next").clicked() {
            actions.push(UserTableAction::GoToPage(current + 1));
        }
    });
}
