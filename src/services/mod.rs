// Adapter exports
pub mod hello;

pub use hello::{HelloMessageServiceImpl, DEFAULT_GREETING};
