use super::Workbench;
use crate::app::theme::UiTheme;
use crate::kernel::{Action as KernelAction, Effect as KernelEffect};

impl Workbench {
    pub(super) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let before = self.store.state().theme;
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }

        let theme = self.store.state().theme;
        if theme != before {
            self.theme = UiTheme::new(theme, self.color_support);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: KernelEffect) {
        match effect {
            KernelEffect::FetchWeather { session, location } => {
                tracing::info!(session = %session, "weather lookup started");
                self.runtime.fetch_weather(self.weather.clone(), session, location);
            }
            KernelEffect::PersistTheme(theme) => match self.settings_path.clone() {
                Some(path) => self.runtime.persist_theme(path, theme),
                None => {
                    tracing::debug!(theme = theme.as_str(), "no settings path, theme not saved")
                }
            },
            KernelEffect::Quit => {
                self.should_quit = true;
            }
        }
    }
}
