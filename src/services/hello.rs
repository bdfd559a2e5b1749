use crate::core::HelloMessageService;

/// Greeting used when no name is given
pub const DEFAULT_GREETING: &str = "Hello, World!";

/// Stateless greeting adapter
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloMessageServiceImpl;

impl HelloMessageServiceImpl {
    pub fn new() -> Self {
        Self
    }
}

impl HelloMessageService for HelloMessageServiceImpl {
    fn hello_message(&self) -> String {
        DEFAULT_GREETING.to_string()
    }

    fn hello_message_for(&self, name: &str) -> String {
        format!("Hello, {}!", name)
    }
}
