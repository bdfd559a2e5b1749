// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Message, Name};
pub use requests::HelloQuery;
pub use responses::ErrorResponse;
