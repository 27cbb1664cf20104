//! Payroll use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for both front-ends.
//! - Own the shared fetch-merge-persist flow for partial updates.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - The service layer remains storage-agnostic.

use crate::model::employee::{Employee, EmployeeId, EmployeePatch};
use crate::repo::employee_repo::{EmployeeRepository, RepoResult};

/// Use-case service wrapper for employee payroll operations.
pub struct PayrollService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> PayrollService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new employee; the store-assigned id is written back into
    /// the instance and returned.
    pub fn add_employee(&self, employee: &mut Employee) -> RepoResult<EmployeeId> {
        self.repo.create_employee(employee)
    }

    /// Overwrites all mutable fields of an existing employee.
    ///
    /// Returns `false` when the id matched no row.
    pub fn update_employee(&self, employee: &Employee) -> RepoResult<bool> {
        self.repo.update_employee(employee)
    }

    /// Deletes an employee permanently. Returns `false` when absent.
    pub fn delete_employee(&self, id: EmployeeId) -> RepoResult<bool> {
        self.repo.delete_employee(id)
    }

    /// Fetches one employee by id.
    pub fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        self.repo.get_employee(id)
    }

    /// Fetches all employees ordered by ascending id.
    pub fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        self.repo.list_employees()
    }

    /// Applies a partial update: fetch, merge, persist.
    ///
    /// Returns the updated record, or `None` when the id does not exist —
    /// including the case where the row disappears between the read and the
    /// write, which is reported as absence rather than resurrected.
    pub fn apply_patch(
        &self,
        id: EmployeeId,
        patch: &EmployeePatch,
    ) -> RepoResult<Option<Employee>> {
        let Some(existing) = self.repo.get_employee(id)? else {
            return Ok(None);
        };

        let merged = patch.apply_to(&existing);
        if !self.repo.update_employee(&merged)? {
            return Ok(None);
        }

        Ok(Some(merged))
    }
}
