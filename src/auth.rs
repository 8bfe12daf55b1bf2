//! Credential models, access-token state, and the request-authentication layer.

#[cfg(feature = "reqwest")] pub mod authenticator;
pub mod credential;
#[cfg(feature = "reqwest")] pub mod provider;
pub mod token;

#[cfg(feature = "reqwest")] pub use authenticator::*;
pub use credential::*;
#[cfg(feature = "reqwest")] pub use provider::*;
pub use token::*;
