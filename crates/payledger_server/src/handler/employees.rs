//! Employee payroll API handlers.
//!
//! # Responsibility
//! - Translate HTTP requests into gateway operations and render the wire
//!   shape.
//! - Enforce create-side validation (all six fields required, decimals must
//!   parse) before anything reaches the gateway.
//!
//! # Invariants
//! - Monetary values are serialized as fixed 2-decimal strings, half-up.
//! - On update, absent, blank or unparsable fields keep their stored value;
//!   create rejects the same inputs. This asymmetry is deliberate (see
//!   DESIGN.md).

use crate::error::ApiError;
use crate::extract::JsonOrForm;
use crate::state::{lock_db, AppState};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use payledger_core::{
    format_money, Employee, EmployeeId, EmployeePatch, Money, PayrollService,
    SqliteEmployeeRepository,
};
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use tokio::task;

/// Wire representation of an employee.
///
/// `gross_salary`/`net_salary` are derived on every read and never stored;
/// `net_salary` is the rounded net.
#[derive(Debug, Serialize)]
pub struct EmployeeBody {
    pub id: EmployeeId,
    pub name: String,
    pub designation: String,
    pub basic_salary: String,
    pub hra: String,
    pub da: String,
    pub deductions: String,
    pub gross_salary: String,
    pub net_salary: String,
}

impl From<&Employee> for EmployeeBody {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            designation: employee.designation.clone(),
            basic_salary: format_money(employee.basic_salary),
            hra: format_money(employee.hra),
            da: format_money(employee.da),
            deductions: format_money(employee.deductions),
            gross_salary: format_money(employee.gross_salary()),
            net_salary: format_money(employee.net_salary_rounded()),
        }
    }
}

/// Monetary input as clients send it: a decimal string (forms, the bundled
/// front-end) or a bare JSON number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MoneyInput {
    Text(String),
    Number(f64),
}

impl MoneyInput {
    /// Parses into an exact decimal; `None` when the input is not a number.
    fn parse(&self) -> Option<Money> {
        match self {
            Self::Text(raw) => Money::from_str(raw.trim()).ok(),
            Self::Number(value) => Money::from_f64(*value),
        }
    }
}

/// Create payload; every field is required at this boundary.
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    name: Option<String>,
    designation: Option<String>,
    basic_salary: Option<MoneyInput>,
    hra: Option<MoneyInput>,
    da: Option<MoneyInput>,
    deductions: Option<MoneyInput>,
}

impl CreateEmployeeRequest {
    fn into_employee(self) -> Result<Employee, ApiError> {
        let name = require_text(self.name, "name")?;
        let designation = require_text(self.designation, "designation")?;
        let basic_salary = require_money(self.basic_salary.as_ref(), "basic_salary")?;
        let hra = require_money(self.hra.as_ref(), "hra")?;
        let da = require_money(self.da.as_ref(), "da")?;
        let deductions = require_money(self.deductions.as_ref(), "deductions")?;

        Ok(Employee::new(
            name,
            designation,
            Some(basic_salary),
            Some(hra),
            Some(da),
            Some(deductions),
        ))
    }
}

/// Update payload; any subset of fields.
#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
    name: Option<String>,
    designation: Option<String>,
    basic_salary: Option<MoneyInput>,
    hra: Option<MoneyInput>,
    da: Option<MoneyInput>,
    deductions: Option<MoneyInput>,
}

impl UpdateEmployeeRequest {
    fn into_patch(self) -> EmployeePatch {
        // Unparsable monetary input degrades to "not supplied" on this path.
        EmployeePatch {
            name: self.name,
            designation: self.designation,
            basic_salary: self.basic_salary.as_ref().and_then(MoneyInput::parse),
            hra: self.hra.as_ref().and_then(MoneyInput::parse),
            da: self.da.as_ref().and_then(MoneyInput::parse),
            deductions: self.deductions.as_ref().and_then(MoneyInput::parse),
        }
    }
}

fn require_text(value: Option<String>, field: &'static str) -> Result<String, ApiError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(ApiError::Validation(format!(
            "missing required field: {field}"
        ))),
    }
}

fn require_money(value: Option<&MoneyInput>, field: &'static str) -> Result<Money, ApiError> {
    let input = value.ok_or_else(|| {
        ApiError::Validation(format!("missing required field: {field}"))
    })?;
    input.parse().ok_or_else(|| {
        ApiError::Validation(format!("invalid decimal value for field: {field}"))
    })
}

fn join_error(err: task::JoinError) -> ApiError {
    ApiError::Internal(err.to_string())
}

/// `GET /api/employees`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<EmployeeBody>>, ApiError> {
    let db = state.db();
    let employees = task::spawn_blocking(move || {
        let conn = lock_db(&db);
        PayrollService::new(SqliteEmployeeRepository::new(&conn)).list_employees()
    })
    .await
    .map_err(join_error)??;

    Ok(Json(employees.iter().map(EmployeeBody::from).collect()))
}

/// `GET /api/employees/{id}`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<EmployeeBody>, ApiError> {
    let db = state.db();
    let employee = task::spawn_blocking(move || {
        let conn = lock_db(&db);
        PayrollService::new(SqliteEmployeeRepository::new(&conn)).get_employee(id)
    })
    .await
    .map_err(join_error)??;

    let employee = employee.ok_or(ApiError::NotFound)?;
    Ok(Json(EmployeeBody::from(&employee)))
}

/// `POST /api/employees`
pub async fn create(
    State(state): State<AppState>,
    JsonOrForm(request): JsonOrForm<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeBody>), ApiError> {
    let mut employee = request.into_employee()?;

    let db = state.db();
    let employee = task::spawn_blocking(move || {
        let conn = lock_db(&db);
        let service = PayrollService::new(SqliteEmployeeRepository::new(&conn));
        service.add_employee(&mut employee)?;
        Ok::<_, payledger_core::RepoError>(employee)
    })
    .await
    .map_err(join_error)??;

    log::info!(
        "event=employee_created module=server status=ok id={}",
        employee.id
    );
    Ok((StatusCode::CREATED, Json(EmployeeBody::from(&employee))))
}

/// `PUT /api/employees/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
    JsonOrForm(request): JsonOrForm<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeBody>, ApiError> {
    let patch = request.into_patch();

    let db = state.db();
    let updated = task::spawn_blocking(move || {
        let conn = lock_db(&db);
        PayrollService::new(SqliteEmployeeRepository::new(&conn)).apply_patch(id, &patch)
    })
    .await
    .map_err(join_error)??;

    let employee = updated.ok_or(ApiError::NotFound)?;
    log::info!("event=employee_updated module=server status=ok id={id}");
    Ok(Json(EmployeeBody::from(&employee)))
}

/// `DELETE /api/employees/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let db = state.db();
    let deleted = task::spawn_blocking(move || {
        let conn = lock_db(&db);
        PayrollService::new(SqliteEmployeeRepository::new(&conn)).delete_employee(id)
    })
    .await
    .map_err(join_error)??;

    if !deleted {
        return Err(ApiError::NotFound);
    }

    log::info!("event=employee_deleted module=server status=ok id={id}");
    Ok(Json(json!({ "status": "deleted" })))
}
