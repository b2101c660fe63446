//! payroll - single-user employee payroll records over a local JSON file.
//!
//! The core is a small in-memory collection ([`records::Roster`]) paired
//! with a whole-file persistence layer ([`store::JsonStore`]). The
//! interactive menu in [`cli::menu`] is a thin driver: it prompts, calls
//! one roster operation, and saves the collection after every mutation.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod records;
pub mod store;

pub use error::{PayrollError, Result};
