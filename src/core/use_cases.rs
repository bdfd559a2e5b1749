use std::sync::Arc;

use crate::core::ports::HelloMessageService;
use crate::models::{Message, Name};

/// Produces the default greeting
#[derive(Clone)]
pub struct GetHelloMessageUseCase {
    service: Arc<dyn HelloMessageService>,
}

impl GetHelloMessageUseCase {
    pub fn new(service: Arc<dyn HelloMessageService>) -> Self {
        Self { service }
    }

    pub fn execute(&self) -> Message {
        Message::new(self.service.hello_message())
    }
}

/// Produces a greeting for a given name
#[derive(Clone)]
pub struct GetHelloMessageByNameUseCase {
    service: Arc<dyn HelloMessageService>,
}

impl GetHelloMessageByNameUseCase {
    pub fn new(service: Arc<dyn HelloMessageService>) -> Self {
        Self { service }
    }

    pub fn execute(&self, name: &Name) -> Message {
        Message::new(self.service.hello_message_for(name.value()))
    }
}
