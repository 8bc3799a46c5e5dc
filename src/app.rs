use crate::config::Config;
use crate::error::FinderError;
use crate::io::{SystemBrowser, UrlOpener};
use crate::state::{DropdownState, SelectionState, UIState};
use crate::style::{self, Theme};
use eframe::egui;
use log::{debug, error};
use std::time::Duration;

pub struct FindMeThis {
    pub selection: SelectionState,
    pub dropdowns: DropdownState,
    pub ui: UIState,
    browser: Box<dyn UrlOpener>,
}

impl FindMeThis {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        let app = Self::with_opener(config, Box::new(SystemBrowser));
        style::apply(&cc.egui_ctx, app.ui.theme, app.ui.font_size);
        app
    }

    pub(crate) fn with_opener(config: &Config, browser: Box<dyn UrlOpener>) -> Self {
        Self {
            selection: SelectionState::new(config.search.engine()),
            dropdowns: DropdownState::default(),
            ui: UIState::new(Theme::from_config(&config.theme.mode), config.font.font_size),
            browser,
        }
    }

    /// Compose the dork for the current selection and open it.
    pub(crate) fn start_search(&mut self) {
        match self.selection.compose_and_open(self.browser.as_ref()) {
            Ok(url) => debug!("Dispatched search to {}", url),
            // Shown inline under the query field
            Err(FinderError::EmptyQuery) => {}
            Err(e) => {
                error!("{}", e);
                self.ui.set_error(e.to_string());
            }
        }
    }
}

impl FindMeThis {
    /// One frame: input first, then panels before the central form.
    pub(crate) fn show(&mut self, ctx: &egui::Context) {
        self.ui.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);
        if self.ui.error_message.is_some() {
            ctx.request_repaint_after(Duration::from_secs(1));
        }

        self.handle_input(ctx);
        self.render_status_bar(ctx);
        self.render_form(ctx);
    }
}

impl eframe::App for FindMeThis {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
