mod config;
mod errors;
mod store;
mod types;

pub use config::{AUTH_SESSION_COOKIE_MAX_AGE, AUTH_SESSION_COOKIE_NAME};
pub use errors::SessionError;
pub use store::{MemorySessionStore, SessionStore};
pub use types::{Session, SessionTokens};
