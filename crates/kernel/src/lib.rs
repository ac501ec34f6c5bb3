//! Campus page-composition kernel.
//!
//! Resolves post categories, selects block content, renders block
//! descriptors and composes page positions. The `campus` binary is a thin
//! command-line shell over this library.

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod permissions;
pub mod render;
pub mod services;
pub mod theme;
