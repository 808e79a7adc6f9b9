//! Authentication Adapters.
//!
//! Implementations of the TokenValidator port.
//!
//! ## Available Adapters
//!
//! - `JwtTokenValidator` - HS256 shared-secret validation (production)
//! - `MockTokenValidator` - Configurable mock for testing

mod jwt;
mod mock;

pub use jwt::JwtTokenValidator;
pub use mock::MockTokenValidator;
