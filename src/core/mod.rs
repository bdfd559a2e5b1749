// Application core: port and use cases
pub mod ports;
pub mod use_cases;

pub use ports::HelloMessageService;
pub use use_cases::{GetHelloMessageByNameUseCase, GetHelloMessageUseCase};
