//! Shared data model and simulation logic for the model playground.
//!
//! Nothing in this crate touches the browser: the frontend owns signals,
//! timers and storage, and drives the types defined here.

pub mod domain;
pub mod enums;
pub mod shared;
