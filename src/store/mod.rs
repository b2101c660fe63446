//! Persistence layer: whole-file load/save of the payroll collection.

pub mod json;

pub use json::JsonStore;
