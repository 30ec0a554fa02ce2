mod config;
mod service;
mod types;

pub use config::{ProviderRegistry, ProviderSettings};
pub use service::AuthService;
pub use types::{AuthenticatedUser, ProviderError, VerifiedCallback};
