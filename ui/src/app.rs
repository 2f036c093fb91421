use crate::{state::State, widgets};

pub struct AdminApp {
    state: State,
    load_started: bool,
}

impl AdminApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            load_started: false,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for AdminApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The members resource is fetched once, on the first frame.
        if !self.load_started {
            self.load_started = true;
            self.state.start_load(ctx);
        }

        // Apply results of background work before rendering.
        self.state.store.sync();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Admin UI");
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                widgets::user_table_panel(&mut self.state.store, ui);
            });
        });
    }
}
