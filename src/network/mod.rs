pub mod client;
pub mod errors;
pub mod requests;
pub mod response;
pub mod secret;
pub mod session;

pub use client::ApiClient;
pub use errors::{AuthError, ResponseFault, TransportError};
pub use secret::{Credentials, SessionToken};
pub use session::login;
