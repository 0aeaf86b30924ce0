pub mod errors;
pub mod guard;
pub mod models;
pub mod ports;
pub mod service;

pub use errors::ErrorKind;
pub use errors::SessionError;
pub use guard::AccessGuard;
pub use models::TokenPair;
pub use service::SessionService;
