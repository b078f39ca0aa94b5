//! Navigation collaborator
//!
//! Sequencers never inspect routing state. They only raise the current
//! screen's fade-out request and push new paths.

/// The routing surface sequencers talk to
pub trait Navigator {
    /// Set or clear the current screen's fade-out request
    fn set_fade_out(&mut self, fade_out: bool);

    fn fade_out_requested(&self) -> bool;

    fn push(&mut self, path: &str);
}

/// A navigator that keeps a plain history stack
#[derive(Clone, Debug, Default)]
pub struct StackNavigator {
    history: Vec<String>,
    fade_out: bool,
}

impl StackNavigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: vec![initial.into()],
            fade_out: false,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Navigator for StackNavigator {
    fn set_fade_out(&mut self, fade_out: bool) {
        self.fade_out = fade_out;
    }

    fn fade_out_requested(&self) -> bool {
        self.fade_out
    }

    fn push(&mut self, path: &str) {
        tracing::info!(path, "navigating");
        self.history.push(path.to_string());
    }
}
