//! Record operations over the in-memory payroll collection.

pub mod roster;
pub mod types;

pub use roster::{EditOutcome, Roster};
pub use types::{Employee, EmployeeDraft, EmployeeUpdate, SortKey};
