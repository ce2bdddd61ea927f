pub mod factory;
pub mod jwt;
pub mod refresh_store;
pub mod token_provider;
pub mod token_service;

pub use factory::build_token_service;
pub use jwt::{JwtCodec, TokenError};
pub use refresh_store::RefreshTokenStore;
pub use token_provider::{TokenPair, TokenProvider};
pub use token_service::{AuthenticatedMember, TokenService};
