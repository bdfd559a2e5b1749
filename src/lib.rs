//! Hello Service - minimal hexagonal HTTP service
//!
//! Requests flow from the actix routes through a use case into the
//! `HelloMessageService` port, whose single adapter formats the greeting.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{GetHelloMessageByNameUseCase, GetHelloMessageUseCase, HelloMessageService};
pub use models::{Message, Name};
pub use routes::{configure_routes, AppState};
pub use services::HelloMessageServiceImpl;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let state = AppState::new(Arc::new(HelloMessageServiceImpl::new()));
        assert_eq!(state.get_hello_message.execute().value(), "Hello, World!");
    }
}
