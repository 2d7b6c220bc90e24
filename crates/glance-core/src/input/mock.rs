use super::InputSource;

/// Fixed-text input source used in tests and demos.
#[derive(Debug, Clone, Default)]
pub struct MockInput {
    text: String,
    auto_start: bool,
}

impl MockInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            auto_start: false,
        }
    }

    pub fn with_auto_start(mut self) -> Self {
        self.auto_start = true;
        self
    }
}

impl InputSource for MockInput {
    type Error = core::convert::Infallible;

    fn session_text(&mut self) -> Result<String, Self::Error> {
        Ok(self.text.clone())
    }

    fn auto_start(&self) -> bool {
        self.auto_start
    }
}
