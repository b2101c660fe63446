use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, Result};

/// One payroll record. `id` is the unique key and never changes after
/// creation; salary is non-negative by convention, unenforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub position: String,
    pub salary: f64,
}

/// Input for the add operation. Salary arrives as raw text and is parsed
/// inside the operation so a bad number rejects the whole record.
#[derive(Debug, Clone)]
pub struct EmployeeDraft {
    pub id: String,
    pub name: String,
    pub position: String,
    pub salary: String,
}

/// Input for the edit operation. `None` means keep the current value;
/// the interactive layer maps blank input to `None`.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub salary: Option<String>,
}

/// Key for the in-place display sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Salary,
}

impl SortKey {
    /// Accepts the menu selectors as well as the key names.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" | "name" => Some(Self::Name),
            "2" | "salary" => Some(Self::Salary),
            _ => None,
        }
    }
}

/// Parse salary text into a finite number, trimming first.
///
/// Infinities and NaN parse as `f64` but have no JSON representation,
/// so a record holding one could never be loaded back; they are
/// rejected here along with plain garbage.
pub fn parse_salary(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| PayrollError::InvalidSalary(trimmed.to_string()))
}
