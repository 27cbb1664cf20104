use payledger_core::db::open_db_in_memory;
use payledger_core::{
    Employee, EmployeePatch, EmployeeRepository, Money, PayrollService, RepoError,
    SqliteEmployeeRepository,
};
use std::str::FromStr;

fn money(text: &str) -> Money {
    Money::from_str(text).unwrap()
}

fn sample(name: &str) -> Employee {
    Employee::new(
        name,
        "Engineer",
        Some(money("5000")),
        Some(money("1000")),
        Some(money("500")),
        Some(money("300")),
    )
}

#[test]
fn create_assigns_id_and_roundtrips_all_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let mut employee = sample("Bob");
    let id = repo.create_employee(&mut employee).unwrap();

    assert!(id > 0);
    assert_eq!(employee.id, id);
    assert!(employee.is_persisted());

    let loaded = repo.get_employee(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.name, "Bob");
    assert_eq!(loaded.designation, "Engineer");
    assert_eq!(loaded.basic_salary, money("5000"));
    assert_eq!(loaded.hra, money("1000"));
    assert_eq!(loaded.da, money("500"));
    assert_eq!(loaded.deductions, money("300"));
    assert_eq!(loaded.net_salary(), money("6200"));
}

#[test]
fn ids_are_unique_and_ascending() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let first = repo.create_employee(&mut sample("A")).unwrap();
    let second = repo.create_employee(&mut sample("B")).unwrap();

    assert!(second > first);
}

#[test]
fn update_existing_overwrites_all_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let mut employee = sample("Bob");
    repo.create_employee(&mut employee).unwrap();

    employee.set_designation("Senior Engineer");
    employee.set_deductions(Some(money("1000")));
    let updated = repo.update_employee(&employee).unwrap();
    assert!(updated);

    let loaded = repo.get_employee(employee.id).unwrap().unwrap();
    assert_eq!(loaded.designation, "Senior Engineer");
    assert_eq!(loaded.deductions, money("1000"));
    assert_eq!(loaded.net_salary(), money("5500"));
}

#[test]
fn update_absent_id_reports_no_match_without_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let ghost = Employee::with_id(999, "Ghost", "None", None, None, None, None);
    let updated = repo.update_employee(&ghost).unwrap();
    assert!(!updated);
}

#[test]
fn delete_reports_no_match_and_get_after_delete_is_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let mut employee = sample("Bob");
    let id = repo.create_employee(&mut employee).unwrap();

    assert!(repo.delete_employee(id).unwrap());
    assert!(!repo.delete_employee(id).unwrap());
    assert!(repo.get_employee(id).unwrap().is_none());
}

#[test]
fn list_is_empty_on_fresh_store_and_ordered_by_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    assert!(repo.list_employees().unwrap().is_empty());

    let mut c = sample("Carol");
    let mut a = sample("Alice");
    let mut b = sample("Bob");
    repo.create_employee(&mut c).unwrap();
    repo.create_employee(&mut a).unwrap();
    repo.create_employee(&mut b).unwrap();

    let all = repo.list_employees().unwrap();
    let ids: Vec<_> = all.iter().map(|e| e.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(all.len(), 3);
}

#[test]
fn corrupt_monetary_column_is_rejected_not_masked() {
    let conn = open_db_in_memory().unwrap();

    conn.execute(
        "INSERT INTO employee (name, designation, basic_salary, hra, da, deductions)
         VALUES ('Broken', 'Row', 'not-a-number', '0', '0', '0');",
        [],
    )
    .unwrap();

    let repo = SqliteEmployeeRepository::new(&conn);
    let err = repo.list_employees().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn service_apply_patch_merges_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let service = PayrollService::new(SqliteEmployeeRepository::new(&conn));

    let mut employee = sample("Bob");
    let id = service.add_employee(&mut employee).unwrap();

    let patch = EmployeePatch {
        deductions: Some(money("1000")),
        ..EmployeePatch::default()
    };
    let updated = service.apply_patch(id, &patch).unwrap().unwrap();

    assert_eq!(updated.name, "Bob");
    assert_eq!(updated.designation, "Engineer");
    assert_eq!(updated.net_salary(), money("5500"));

    let reloaded = service.get_employee(id).unwrap().unwrap();
    assert_eq!(reloaded.deductions, money("1000"));
}

#[test]
fn service_apply_patch_on_absent_id_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let service = PayrollService::new(SqliteEmployeeRepository::new(&conn));

    let patch = EmployeePatch {
        name: Some("Nobody".to_string()),
        ..EmployeePatch::default()
    };
    assert!(service.apply_patch(12345, &patch).unwrap().is_none());
}

#[test]
fn monetary_precision_survives_the_store() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let mut employee = Employee::new(
        "Precise",
        "Quant",
        Some(money("0.005")),
        Some(money("1000.0001")),
        None,
        Some(money("0.0001")),
    );
    let id = repo.create_employee(&mut employee).unwrap();

    let loaded = repo.get_employee(id).unwrap().unwrap();
    assert_eq!(loaded.basic_salary, money("0.005"));
    assert_eq!(loaded.hra, money("1000.0001"));
    assert_eq!(loaded.net_salary(), money("1000.005"));
    assert_eq!(loaded.net_salary_rounded(), money("1000.01"));
}
