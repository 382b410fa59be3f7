//! # boxoffice-core
//!
//! Core crate for Marquee Box-Office. Contains trait seams, configuration
//! schemas, typed identifiers, time windows, and the unified error system.
//!
//! This crate has **no** internal dependencies on other box-office crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
