//! Interactive payroll console.
//!
//! # Responsibility
//! - Drive the five gateway operations from a numbered menu.
//! - Keep parse/blank validation at this boundary; core never sees bad
//!   input.
//!
//! # Invariants
//! - Storage errors are reported and the menu loop continues.
//! - Blank input during an update means "keep the current value".

use dialoguer::{Input, Select};
use payledger_core::db::open_db;
use payledger_core::{
    default_log_level, format_money, init_logging, Employee, EmployeeId, EmployeePatch, Money,
    PayLedgerConfig, PayrollService, RepoError, SqliteEmployeeRepository,
};
use std::str::FromStr;

const MENU_ITEMS: &[&str] = &[
    "Add Employee",
    "Update Employee",
    "Delete Employee",
    "View All Employees",
    "Exit",
];

fn main() {
    let config = PayLedgerConfig::from_env();

    // Console stays quiet unless a log directory is configured.
    if config.log_dir.is_some() {
        if let Err(message) = init_logging(default_log_level(), config.log_dir.as_deref()) {
            eprintln!("Logging disabled: {message}");
        }
    }

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("Failed to open database {}: {err}", config.db_path.display());
            std::process::exit(1);
        }
    };

    let service = PayrollService::new(SqliteEmployeeRepository::new(&conn));
    if let Err(err) = run_menu(&service) {
        eprintln!("Console error: {err}");
        std::process::exit(1);
    }
}

fn run_menu(
    service: &PayrollService<SqliteEmployeeRepository<'_>>,
) -> dialoguer::Result<()> {
    println!("==== Employee Payroll System ====");
    loop {
        let choice = Select::new()
            .with_prompt("Choose an action")
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        let outcome = match choice {
            0 => add_employee(service),
            1 => update_employee(service),
            2 => delete_employee(service),
            3 => view_all_employees(service),
            _ => {
                println!("Exiting. Goodbye!");
                return Ok(());
            }
        };

        if let Err(MenuError::Prompt(err)) = outcome {
            return Err(err);
        }
        println!();
    }
}

/// Distinguishes prompt-channel failures (terminal gone) from storage
/// errors, which are reported inline and never end the loop.
enum MenuError {
    Prompt(dialoguer::Error),
}

impl From<dialoguer::Error> for MenuError {
    fn from(value: dialoguer::Error) -> Self {
        Self::Prompt(value)
    }
}

type MenuResult = Result<(), MenuError>;

fn report_db_error(err: &RepoError) {
    log::error!("event=console_op module=cli status=error error={err}");
    println!("Database error: {err}");
}

fn add_employee(service: &PayrollService<SqliteEmployeeRepository<'_>>) -> MenuResult {
    println!("-- Add New Employee --");
    let name = prompt_required_text("Name")?;
    let designation = prompt_required_text("Designation")?;
    let basic_salary = prompt_required_money("Basic Salary")?;
    let hra = prompt_required_money("HRA")?;
    let da = prompt_required_money("DA")?;
    let deductions = prompt_required_money("Deductions")?;

    let mut employee = Employee::new(
        name,
        designation,
        Some(basic_salary),
        Some(hra),
        Some(da),
        Some(deductions),
    );

    match service.add_employee(&mut employee) {
        Ok(id) => println!("Employee added with ID: {id}"),
        Err(err) => report_db_error(&err),
    }
    Ok(())
}

fn update_employee(service: &PayrollService<SqliteEmployeeRepository<'_>>) -> MenuResult {
    println!("-- Update Employee --");
    let id = prompt_id("Employee ID")?;

    let existing = match service.get_employee(id) {
        Ok(Some(employee)) => employee,
        Ok(None) => {
            println!("Employee not found.");
            return Ok(());
        }
        Err(err) => {
            report_db_error(&err);
            return Ok(());
        }
    };

    println!("Leave a field blank to keep the current value.");
    let patch = EmployeePatch {
        name: prompt_optional_text("Name", &existing.name)?,
        designation: prompt_optional_text("Designation", &existing.designation)?,
        basic_salary: prompt_optional_money("Basic Salary", existing.basic_salary)?,
        hra: prompt_optional_money("HRA", existing.hra)?,
        da: prompt_optional_money("DA", existing.da)?,
        deductions: prompt_optional_money("Deductions", existing.deductions)?,
    };

    match service.apply_patch(id, &patch) {
        Ok(Some(_)) => println!("Employee updated."),
        Ok(None) => println!("Employee not found."),
        Err(err) => report_db_error(&err),
    }
    Ok(())
}

fn delete_employee(service: &PayrollService<SqliteEmployeeRepository<'_>>) -> MenuResult {
    println!("-- Delete Employee --");
    let id = prompt_id("Employee ID")?;

    match service.delete_employee(id) {
        Ok(true) => println!("Employee deleted."),
        Ok(false) => println!("Employee not found."),
        Err(err) => report_db_error(&err),
    }
    Ok(())
}

fn view_all_employees(service: &PayrollService<SqliteEmployeeRepository<'_>>) -> MenuResult {
    println!("-- All Employee Payroll Details --");
    let employees = match service.list_employees() {
        Ok(employees) => employees,
        Err(err) => {
            report_db_error(&err);
            return Ok(());
        }
    };

    if employees.is_empty() {
        println!("No employees found.");
        return Ok(());
    }

    render_table(&employees);
    Ok(())
}

fn render_table(employees: &[Employee]) {
    println!(
        "{:<5} {:<20} {:<18} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "ID", "Name", "Designation", "Basic", "HRA", "DA", "Deductions", "Net"
    );
    println!("{}", "-".repeat(109));
    for employee in employees {
        println!(
            "{:<5} {:<20} {:<18} {:>12} {:>12} {:>12} {:>12} {:>12}",
            employee.id,
            truncate(&employee.name, 20),
            truncate(&employee.designation, 18),
            format_money(employee.basic_salary),
            format_money(employee.hra),
            format_money(employee.da),
            format_money(employee.deductions),
            format_money(employee.net_salary_rounded()),
        );
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    value.chars().take(max_chars).collect()
}

fn prompt_required_text(label: &str) -> Result<String, dialoguer::Error> {
    let value: String = Input::new()
        .with_prompt(label)
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Value cannot be empty.")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn prompt_required_money(label: &str) -> Result<Money, dialoguer::Error> {
    loop {
        let raw: String = Input::new().with_prompt(label).interact_text()?;
        match Money::from_str(raw.trim()) {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

fn prompt_id(label: &str) -> Result<EmployeeId, dialoguer::Error> {
    loop {
        let raw: String = Input::new().with_prompt(label).interact_text()?;
        match raw.trim().parse::<EmployeeId>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a valid integer."),
        }
    }
}

fn prompt_optional_text(
    label: &str,
    current: &str,
) -> Result<Option<String>, dialoguer::Error> {
    let raw: String = Input::new()
        .with_prompt(format!("{label} [{current}]"))
        .allow_empty(true)
        .interact_text()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

fn prompt_optional_money(
    label: &str,
    current: Money,
) -> Result<Option<Money>, dialoguer::Error> {
    let raw: String = Input::new()
        .with_prompt(format!("{label} [{}]", format_money(current)))
        .allow_empty(true)
        .interact_text()?;
    // Blank or unparsable input keeps the current value.
    Ok(Money::from_str(raw.trim()).ok())
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_keeps_short_values_and_cuts_long_ones() {
        assert_eq!(truncate("Alice", 20), "Alice");
        assert_eq!(truncate("A very long employee name", 10), "A very lon");
    }
}
