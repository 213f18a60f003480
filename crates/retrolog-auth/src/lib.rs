//! # retrolog-auth
//!
//! Identity and authorization for RetroLog.
//!
//! ## Modules
//!
//! - `jwt` : signed, time-limited bearer tokens carrying a username claim
//! - `password` : Argon2id password hashing and signup policy
//! - `guard` : resolves a presented token to a [`User`](retrolog_entity::user::User)
//! - `ownership` : the owner-only mutation rule for posts and comments

pub mod guard;
pub mod jwt;
pub mod ownership;
pub mod password;

pub use guard::{AuthFailure, AuthorizationGuard, UserLookup};
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder, TokenError};
pub use ownership::{Owned, can_mutate, ensure_can_mutate};
pub use password::{PasswordHasher, PasswordValidator};
