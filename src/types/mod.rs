//! Common types used across the OKX client library.

pub mod common;
pub mod cursor;
pub mod serde_helpers;

pub use common::*;
pub use cursor::secs_to_millisecs;
