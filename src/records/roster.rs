use std::collections::HashSet;

use tracing::debug;

use crate::error::{PayrollError, Result};

use super::types::{Employee, EmployeeDraft, EmployeeUpdate, SortKey, parse_salary};

/// The in-memory payroll collection.
///
/// Owned by the controlling loop for the process lifetime. Every operation
/// leaves the collection untouched on error; persistence is the caller's
/// job so a failed save can be reported while the change stays in memory.
#[derive(Debug, Default)]
pub struct Roster {
    employees: Vec<Employee>,
}

/// Result of a successful edit. A non-blank but unparseable salary does
/// not fail the edit; it is carried here so the caller can report that the
/// salary update was skipped while the other fields were applied.
#[derive(Debug)]
pub struct EditOutcome {
    pub salary_error: Option<PayrollError>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from loaded records, enforcing id uniqueness.
    ///
    /// A backing file with duplicate ids would make every later lookup
    /// ambiguous, so it is rejected as corrupt instead of loaded.
    pub fn from_records(records: Vec<Employee>) -> Result<Self> {
        let mut seen = HashSet::new();
        for employee in &records {
            if !seen.insert(employee.id.as_str()) {
                return Err(PayrollError::CorruptData(format!(
                    "duplicate employee id {:?}",
                    employee.id
                )));
            }
        }
        Ok(Self { employees: records })
    }

    /// Append a new record. The id must be unused and the salary text must
    /// parse; either failure aborts with no partial record added.
    pub fn add(&mut self, draft: EmployeeDraft) -> Result<()> {
        if self.contains(&draft.id) {
            return Err(PayrollError::DuplicateId(draft.id));
        }
        let salary = parse_salary(&draft.salary)?;

        debug!(target: "roster", id = %draft.id, "adding employee");
        self.employees.push(Employee {
            id: draft.id,
            name: draft.name,
            position: draft.position,
            salary,
        });
        Ok(())
    }

    /// Update a record in place. Fields left `None` keep their value; a
    /// provided salary that fails to parse is skipped (reported in the
    /// outcome) while name and position still apply.
    pub fn edit(&mut self, id: &str, update: &EmployeeUpdate) -> Result<EditOutcome> {
        let index = self
            .position_by_id(id)
            .ok_or_else(|| PayrollError::NotFound(id.to_string()))?;

        let mut salary_error = None;
        if let Some(name) = &update.name {
            self.employees[index].name = name.clone();
        }
        if let Some(position) = &update.position {
            self.employees[index].position = position.clone();
        }
        if let Some(salary) = &update.salary {
            match parse_salary(salary) {
                Ok(value) => self.employees[index].salary = value,
                Err(err) => salary_error = Some(err),
            }
        }

        debug!(target: "roster", id = %id, skipped_salary = salary_error.is_some(), "edited employee");
        Ok(EditOutcome { salary_error })
    }

    /// Remove the record with the given id, returning it.
    pub fn delete(&mut self, id: &str) -> Result<Employee> {
        let index = self
            .employees
            .iter()
            .position(|employee| employee.id == id)
            .ok_or_else(|| PayrollError::NotFound(id.to_string()))?;

        debug!(target: "roster", id = %id, "deleting employee");
        Ok(self.employees.remove(index))
    }

    /// Exact-id lookup. Read-only; the collection order is not disturbed.
    pub fn search(&self, id: &str) -> Result<&Employee> {
        self.position_by_id(id)
            .map(|index| &self.employees[index])
            .ok_or_else(|| PayrollError::NotFound(id.to_string()))
    }

    /// Reorder the collection in place, ascending by the given key.
    ///
    /// The new order lasts for the rest of the session but is not written
    /// back by this operation itself; only a later mutation persists it.
    pub fn sort_by(&mut self, key: SortKey) {
        match key {
            SortKey::Name => self.employees.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Salary => self
                .employees
                .sort_by(|a, b| a.salary.total_cmp(&b.salary)),
        }
        debug!(target: "roster", key = ?key, "sorted collection");
    }

    /// Lookup strategy shared by edit and search: order an index of
    /// positions by id, then binary-search it. The collection itself keeps
    /// its order; only the transient index is sorted.
    fn position_by_id(&self, id: &str) -> Option<usize> {
        let mut order: Vec<usize> = (0..self.employees.len()).collect();
        order.sort_by(|&a, &b| self.employees[a].id.cmp(&self.employees[b].id));
        order
            .binary_search_by(|&index| self.employees[index].id.as_str().cmp(id))
            .ok()
            .map(|slot| order[slot])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.employees.iter().any(|employee| employee.id == id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    #[must_use]
    pub fn records(&self) -> &[Employee] {
        &self.employees
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
