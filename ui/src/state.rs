use adminui_business::{AppConfig, LoadMembersCommand, UserTableState};
use adminui_states::Store;

/// The main application state.
pub struct State {
    /// Configuration the app was started with.
    pub config: AppConfig,
    /// Store holding the user table.
    pub store: Store<UserTableState>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl State {
    pub fn new(config: AppConfig) -> Self {
        let store = Store::new(UserTableState::new(config.select_all_policy));
        Self { config, store }
    }

    /// State pointed at a mock members endpoint.
    pub fn test(members_url: String) -> Self {
        Self::new(AppConfig::new(members_url))
    }

    /// Starts the one-shot members load, waking `ctx` when its result is queued.
    ///
    /// Does nothing once a load has started.
    pub fn start_load(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        self.store.set_notify(move || ctx.request_repaint());

        let command = LoadMembersCommand::new(self.config.members_url.clone());
        if let Err(err) = command.spawn(&mut self.store) {
            log::error!("Failed to start members load: {err}");
        }
    }

    pub fn table(&self) -> &UserTableState {
        self.store.state()
    }
}
