//! Utility modules for the Hazy application.
//!
//! - [`datetime`] - Server timestamp parsing and relative date labels

pub mod datetime;
