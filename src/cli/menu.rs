//! Interactive payroll menu.
//!
//! Thin driver over the roster and the store: each choice prompts for its
//! inputs, calls one record operation, and saves the whole collection
//! after every mutation. Record-operation errors are reported and the
//! menu keeps running; only startup and the final save can end the
//! session with an error.

use std::io::{self, Write as IoWrite};

use colored::Colorize;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::render;
use crate::error::{PayrollError, Result};
use crate::records::{EmployeeDraft, EmployeeUpdate, Roster, SortKey};

pub fn run(ctx: &AppContext) -> Result<()> {
    let records = ctx.store.load()?;
    let mut roster = Roster::from_records(records)?;
    debug!(target: "menu", count = roster.len(), "payroll loaded");

    loop {
        print_menu();
        let Some(choice) = prompt("Enter choice: ")? else {
            // EOF on stdin behaves like Exit so piped sessions end cleanly
            return save_and_exit(ctx, &roster);
        };

        match choice.as_str() {
            "1" => add_flow(ctx, &mut roster)?,
            "2" => edit_flow(ctx, &mut roster)?,
            "3" => delete_flow(ctx, &mut roster)?,
            "4" => display_flow(&mut roster)?,
            "5" => search_flow(&roster)?,
            "0" => return save_and_exit(ctx, &roster),
            _ => println!("{} Invalid choice.", "!".yellow()),
        }
    }
}

fn add_flow(ctx: &AppContext, roster: &mut Roster) -> Result<()> {
    let Some(id) = prompt("Enter employee ID: ")? else {
        return Ok(());
    };
    if roster.contains(&id) {
        println!("{} ID already exists.", "✗".red());
        return Ok(());
    }

    let Some(name) = prompt("Enter employee name: ")? else {
        return Ok(());
    };
    let Some(position) = prompt("Enter employee position: ")? else {
        return Ok(());
    };
    let Some(salary) = prompt("Enter employee salary: ")? else {
        return Ok(());
    };

    match roster.add(EmployeeDraft {
        id,
        name,
        position,
        salary,
    }) {
        Ok(()) => {
            persist(ctx, roster);
            println!("{} Employee added.", "✓".green().bold());
        }
        Err(PayrollError::InvalidSalary(_)) => {
            println!("{} Invalid salary. Please enter a valid number.", "✗".red());
        }
        Err(PayrollError::DuplicateId(_)) => {
            println!("{} ID already exists.", "✗".red());
        }
        Err(err) => return Err(err),
    }
    Ok(())
}

fn edit_flow(ctx: &AppContext, roster: &mut Roster) -> Result<()> {
    let Some(id) = prompt("Enter employee ID to edit: ")? else {
        return Ok(());
    };
    let current = match roster.search(&id) {
        Ok(found) => found.clone(),
        Err(PayrollError::NotFound(_)) => {
            println!("{} Employee not found.", "✗".red());
            return Ok(());
        }
        Err(err) => return Err(err),
    };
    println!("Editing employee: {}", render::record_line(&current));

    let Some(name) = prompt("New name (leave blank to keep): ")? else {
        return Ok(());
    };
    let Some(position) = prompt("New position (leave blank to keep): ")? else {
        return Ok(());
    };
    let Some(salary) = prompt("New salary (leave blank to keep): ")? else {
        return Ok(());
    };

    let update = EmployeeUpdate {
        name: blank_to_none(name),
        position: blank_to_none(position),
        salary: blank_to_none(salary),
    };

    match roster.edit(&id, &update) {
        Ok(outcome) => {
            if outcome.salary_error.is_some() {
                println!(
                    "{} Invalid salary input; skipping salary update.",
                    "!".yellow()
                );
            }
            persist(ctx, roster);
            println!("{} Employee updated.", "✓".green().bold());
        }
        Err(PayrollError::NotFound(_)) => {
            println!("{} Employee not found.", "✗".red());
        }
        Err(err) => return Err(err),
    }
    Ok(())
}

fn delete_flow(ctx: &AppContext, roster: &mut Roster) -> Result<()> {
    let Some(id) = prompt("Enter employee ID to delete: ")? else {
        return Ok(());
    };

    match roster.delete(&id) {
        Ok(_removed) => {
            persist(ctx, roster);
            println!("{} Employee deleted.", "✓".green().bold());
        }
        Err(PayrollError::NotFound(_)) => {
            println!("{} Employee not found.", "✗".red());
        }
        Err(err) => return Err(err),
    }
    Ok(())
}

fn display_flow(roster: &mut Roster) -> Result<()> {
    if roster.is_empty() {
        println!("No employees to display.");
        return Ok(());
    }

    println!("Sort by: 1) Name  2) Salary");
    let Some(choice) = prompt("Enter choice: ")? else {
        return Ok(());
    };
    let Some(key) = SortKey::parse(&choice) else {
        println!("{} Invalid choice.", "!".yellow());
        return Ok(());
    };

    // Reorders the live collection; the new order is not saved here
    roster.sort_by(key);
    print!("{}", render::table(roster.records()));
    Ok(())
}

fn search_flow(roster: &Roster) -> Result<()> {
    if roster.is_empty() {
        println!("No employees to search.");
        return Ok(());
    }

    let Some(id) = prompt("Enter employee ID to search: ")? else {
        return Ok(());
    };
    match roster.search(&id) {
        Ok(found) => {
            println!("Employee found:");
            println!("{}", render::record_line(found));
        }
        Err(PayrollError::NotFound(_)) => {
            println!("{} Employee not found.", "✗".red());
        }
        Err(err) => return Err(err),
    }
    Ok(())
}

fn save_and_exit(ctx: &AppContext, roster: &Roster) -> Result<()> {
    println!("Saving and exiting...");
    ctx.store.save(roster.records())
}

/// Save after a mutation. A failure is reported but does not end the
/// session; the collection keeps the change in memory and the next
/// successful save will carry it.
fn persist(ctx: &AppContext, roster: &Roster) {
    if let Err(err) = ctx.store.save(roster.records()) {
        println!("{} {err}", "✗".red());
    }
}

fn print_menu() {
    println!();
    println!("{}", "--- PAYROLL SYSTEM ---".bold());
    println!("1) Add Employee");
    println!("2) Edit Employee");
    println!("3) Delete Employee");
    println!("4) Display Sorted List");
    println!("5) Search Employee by ID");
    println!("0) Exit");
}

/// Print a prompt and read one trimmed line. `None` means EOF.
fn prompt(message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn blank_to_none(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
