//! Terminal host configuration.

use std::time::Duration;

/// Settings for [`Application`](crate::Application).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// How long the input reader blocks waiting for a terminal event before
    /// checking whether the host is still alive.
    pub poll_interval: Duration,
    pub mouse_capture: bool,
    /// Report focus gained/lost events.
    pub focus_change: bool,
    /// Dispatch the terminal size as a resize event right after start-up, so
    /// the first component knows its area before any real resize happens.
    pub initial_resize: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
            mouse_capture: true,
            focus_change: true,
            initial_resize: true,
        }
    }
}

impl AppConfig {
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn mouse_capture(mut self, enabled: bool) -> Self {
        self.mouse_capture = enabled;
        self
    }

    pub fn focus_change(mut self, enabled: bool) -> Self {
        self.focus_change = enabled;
        self
    }

    pub fn initial_resize(mut self, enabled: bool) -> Self {
        self.initial_resize = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = AppConfig::default()
            .poll_interval(Duration::from_millis(20))
            .mouse_capture(false)
            .initial_resize(false);

        assert_eq!(config.poll_interval, Duration::from_millis(20));
        assert!(!config.mouse_capture);
        assert!(config.focus_change);
        assert!(!config.initial_resize);
    }
}
