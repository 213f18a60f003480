//! Core type definitions used across the RetroLog workspace.

pub mod id;

pub use id::*;
