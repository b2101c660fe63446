//! Plain-text rendering for menu output.

use crate::records::Employee;

/// Fixed-width listing of the collection in its current order.
#[must_use]
pub fn table(employees: &[Employee]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<10} {:<20} {:<20} {:>10}\n",
        "ID", "Name", "Position", "Salary"
    ));
    out.push_str(&"─".repeat(63));
    out.push('\n');

    for employee in employees {
        out.push_str(&format!(
            "{:<10} {:<20} {:<20} {:>10.2}\n",
            employee.id, employee.name, employee.position, employee.salary
        ));
    }
    out
}

/// One-line rendering used by the search and edit flows.
#[must_use]
pub fn record_line(employee: &Employee) -> String {
    format!(
        "ID: {}, Name: {}, Position: {}, Salary: {}",
        employee.id, employee.name, employee.position, employee.salary
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_employee(id: &str, name: &str, salary: f64) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            position: "Eng".to_string(),
            salary,
        }
    }

    // ── 1. test_table_header_and_rule ───────────────────────────────

    #[test]
    fn test_table_header_and_rule() {
        let out = table(&[]);
        let mut lines = out.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("ID"));
        assert!(header.contains("Name"));
        assert!(header.contains("Position"));
        assert!(header.ends_with("Salary"));
        assert!(lines.next().unwrap().starts_with('─'));
    }

    // ── 2. test_table_rows_follow_collection_order ──────────────────

    #[test]
    fn test_table_rows_follow_collection_order() {
        let out = table(&[
            make_employee("E2", "Bob", 800.0),
            make_employee("E1", "Alice", 1000.0),
        ]);
        let rows: Vec<&str> = out.lines().skip(2).collect();
        assert!(rows[0].starts_with("E2"));
        assert!(rows[1].starts_with("E1"));
    }

    // ── 3. test_table_salary_two_decimals ───────────────────────────

    #[test]
    fn test_table_salary_two_decimals() {
        let out = table(&[make_employee("E1", "Alice", 1000.0)]);
        assert!(out.contains("1000.00"));
    }

    // ── 4. test_table_column_alignment ──────────────────────────────

    #[test]
    fn test_table_column_alignment() {
        let out = table(&[make_employee("E1", "Alice", 1.5)]);
        let row = out.lines().nth(2).unwrap();
        // id column padded to 10, name column starts right after
        assert_eq!(&row[..11], "E1         ");
        assert!(row.ends_with("1.50"));
    }

    // ── 5. test_record_line_format ──────────────────────────────────

    #[test]
    fn test_record_line_format() {
        let line = record_line(&make_employee("E1", "Alice", 1000.0));
        assert_eq!(line, "ID: E1, Name: Alice, Position: Eng, Salary: 1000");
    }

    // ── 6. test_record_line_keeps_fraction ──────────────────────────

    #[test]
    fn test_record_line_keeps_fraction() {
        let line = record_line(&make_employee("E1", "Alice", 1234.56));
        assert!(line.ends_with("Salary: 1234.56"));
    }
}
