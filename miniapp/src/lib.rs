//! # Ultroid Mini App Core
//!
//! Theme management and settings synchronization for the Ultroid userbot
//! Telegram Mini App, independent of any rendering layer.
//!
//! ## Features
//!
//! - Closed registry of five compiled-in themes with id fallback
//! - Projection of a theme onto style variables, including RGB triplets
//! - A typed settings form with a clean/dirty state machine
//! - Load and save against the remote settings store, with the theme split
//!   out of the batched save
//! - Non-fatal error reporting through user-visible notices
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and centralized error reporting
//! - [`logger`] - Logging setup
//! - [`notify`] - User-facing notices
//! - [`settings`] - Settings form model, schema and synchronizer
//! - [`theme`] - Theme registry, applicator and controller
//! - [`utils`] - Avatar helpers
//! - [`validation`] - Value validation for form fields

pub mod config;
pub mod error;
pub mod logger;
pub mod notify;
pub mod settings;
pub mod theme;
pub mod utils;
pub mod validation;

pub use error::{AppError, AppResult, ErrorReporter};
pub use notify::{Notice, Notifier};
pub use validation::Validator;
