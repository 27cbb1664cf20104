//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical payroll record and its derived salary values.
//! - Own the partial-update merge semantics used by both front-ends.
//!
//! # Invariants
//! - `id` is `0` until the store assigns one on create; it never changes
//!   afterwards.
//! - The four monetary fields are never null: absent input passes through
//!   [`money_or_zero`] at every mutation boundary (constructor, setter,
//!   merge).
//! - Arithmetic on monetary values is exact; rounding happens only in
//!   [`Employee::net_salary_rounded`] and display formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Store-assigned identity. Zero marks a record that is not yet persisted.
pub type EmployeeId = i64;

/// Fixed-point monetary amount.
pub type Money = Decimal;

/// Fraction digits for displayed and serialized monetary values.
pub const MONEY_SCALE: u32 = 2;

/// Coerces an absent monetary value to zero.
///
/// Single normalization point; every constructor, setter and merge path
/// funnels through here.
pub fn money_or_zero(value: Option<Money>) -> Money {
    value.unwrap_or(Money::ZERO)
}

/// Rounds a monetary value to two fraction digits, half-up.
pub fn round_money(value: Money) -> Money {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a monetary value as a fixed two-decimal string, half-up rounded.
///
/// This is the only rendering ever shown or serialized for money.
pub fn format_money(value: Money) -> String {
    format!("{:.2}", round_money(value))
}

/// Canonical payroll record.
///
/// Gross and net salary are always derived from the four raw monetary
/// fields; the store never holds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned row id; `0` before the create operation runs.
    pub id: EmployeeId,
    /// Display name. Non-blank enforcement is an adapter responsibility.
    pub name: String,
    /// Job title.
    pub designation: String,
    /// Base pay before allowances.
    pub basic_salary: Money,
    /// Housing allowance.
    pub hra: Money,
    /// Dearness allowance.
    pub da: Money,
    /// Total deductions; may exceed gross, leaving a negative net.
    pub deductions: Money,
}

impl Employee {
    /// Creates a not-yet-persisted employee (`id = 0`).
    pub fn new(
        name: impl Into<String>,
        designation: impl Into<String>,
        basic_salary: Option<Money>,
        hra: Option<Money>,
        da: Option<Money>,
        deductions: Option<Money>,
    ) -> Self {
        Self::with_id(0, name, designation, basic_salary, hra, da, deductions)
    }

    /// Reconstructs an employee from stored fields.
    ///
    /// Used by the persistence gateway when mapping rows back into domain
    /// records.
    pub fn with_id(
        id: EmployeeId,
        name: impl Into<String>,
        designation: impl Into<String>,
        basic_salary: Option<Money>,
        hra: Option<Money>,
        da: Option<Money>,
        deductions: Option<Money>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            designation: designation.into(),
            basic_salary: money_or_zero(basic_salary),
            hra: money_or_zero(hra),
            da: money_or_zero(da),
            deductions: money_or_zero(deductions),
        }
    }

    /// Sum of basic pay and allowances, exact.
    pub fn gross_salary(&self) -> Money {
        self.basic_salary + self.hra + self.da
    }

    /// Gross minus deductions, exact. A negative net is a valid state.
    pub fn net_salary(&self) -> Money {
        self.gross_salary() - self.deductions
    }

    /// Net salary rounded to two fraction digits, half-up.
    ///
    /// The exact net is internal-only; this is the value front-ends show.
    pub fn net_salary_rounded(&self) -> Money {
        round_money(self.net_salary())
    }

    /// Returns whether this record has been assigned a store identity.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_designation(&mut self, designation: impl Into<String>) {
        self.designation = designation.into();
    }

    pub fn set_basic_salary(&mut self, value: Option<Money>) {
        self.basic_salary = money_or_zero(value);
    }

    pub fn set_hra(&mut self, value: Option<Money>) {
        self.hra = money_or_zero(value);
    }

    pub fn set_da(&mut self, value: Option<Money>) {
        self.da = money_or_zero(value);
    }

    pub fn set_deductions(&mut self, value: Option<Money>) {
        self.deductions = money_or_zero(value);
    }
}

/// Field-presence record for partial updates.
///
/// `None` means "not supplied". For monetary fields the adapters also map
/// unparsable input to `None`, so the merge itself stays a total function
/// with no error path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub basic_salary: Option<Money>,
    pub hra: Option<Money>,
    pub da: Option<Money>,
    pub deductions: Option<Money>,
}

impl EmployeePatch {
    /// Returns true when the patch supplies no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.designation.is_none()
            && self.basic_salary.is_none()
            && self.hra.is_none()
            && self.da.is_none()
            && self.deductions.is_none()
    }

    /// Merges this patch into `existing` and returns the record to persist.
    ///
    /// # Contract
    /// - String fields replace only when supplied and non-blank after
    ///   trimming; a supplied-but-blank string is "no change", not "clear".
    /// - Monetary fields replace when supplied, keep otherwise.
    /// - `id` is never changed.
    pub fn apply_to(&self, existing: &Employee) -> Employee {
        let mut merged = existing.clone();
        if let Some(name) = &self.name {
            if !name.trim().is_empty() {
                merged.set_name(name.clone());
            }
        }
        if let Some(designation) = &self.designation {
            if !designation.trim().is_empty() {
                merged.set_designation(designation.clone());
            }
        }
        if self.basic_salary.is_some() {
            merged.set_basic_salary(self.basic_salary);
        }
        if self.hra.is_some() {
            merged.set_hra(self.hra);
        }
        if self.da.is_some() {
            merged.set_da(self.da);
        }
        if self.deductions.is_some() {
            merged.set_deductions(self.deductions);
        }
        merged
    }
}
