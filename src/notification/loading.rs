pub const LOADING_MESSAGE: &str = "Searching flights...";

/// Full-screen busy overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingState {
    message: Option<String>,
}

impl LoadingState {
    pub fn show(&mut self) {
        self.show_with(LOADING_MESSAGE);
    }

    pub fn show_with(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }

    pub fn hide(&mut self) {
        self.message = None;
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
