//! Hazy - a terminal client for the Hazy English vocabulary service
//!
//! Look up English words, keep a personal list of saved words, and browse
//! their definitions, examples and pronunciations from the terminal.
//!
//! # Modules
//!
//! * [`auth`] - Session token lifecycle and persistence
//! * [`backend`] - REST client for the vocabulary service
//! * [`config`] - Application configuration management
//! * [`vocabulary`] - Saved-words list and word lookup state
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Login, logout and the shared session token
pub mod auth;

/// HTTP client and wire mapping for the vocabulary service
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

/// Saved words, current word and search state
pub mod vocabulary;
