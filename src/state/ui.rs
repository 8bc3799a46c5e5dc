// UI state - presentation settings and transient status messages
use crate::style::Theme;
use std::time::Instant;

pub struct UIState {
    pub theme: Theme,
    pub font_size: f32,
    pub error_message: Option<(String, Instant)>,
    pub focus_query: bool,
}

impl UIState {
    pub fn new(theme: Theme, font_size: f32) -> Self {
        Self {
            theme,
            font_size,
            error_message: None,
            focus_query: true,
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        self.clear_expired_at(Instant::now(), timeout_secs);
    }

    fn clear_expired_at(&mut self, now: Instant, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if now.saturating_duration_since(*time).as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_fresh_error_survives_clear() {
        let mut ui = UIState::new(Theme::Dark, 14.0);
        ui.set_error("Failed to open browser".to_string());
        ui.clear_expired_messages(5);
        assert!(ui.error_message.is_some());
    }

    #[test]
    fn test_expired_error_is_cleared() {
        let mut ui = UIState::new(Theme::Dark, 14.0);
        ui.set_error("old".to_string());
        let (_, set_at) = ui.error_message.clone().expect("error set");

        ui.clear_expired_at(set_at + Duration::from_secs(4), 5);
        assert!(ui.error_message.is_some());

        ui.clear_expired_at(set_at + Duration::from_secs(10), 5);
        assert!(ui.error_message.is_none());
    }
}
