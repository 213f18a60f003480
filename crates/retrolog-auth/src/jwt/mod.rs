//! Token encoding, decoding, and claims.
//!
//! Tokens are stateless: there is no server-side revocation list, so a
//! token stays valid until it expires even after the client logs out.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::{JwtDecoder, TokenError};
pub use encoder::{IssuedToken, JwtEncoder};
