//! Signup, password authentication, and login.

pub mod service;

pub use service::{AccountService, LoginOutcome};
