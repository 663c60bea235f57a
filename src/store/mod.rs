use async_trait::async_trait;
use derive_more::{Display, Error, From};

use crate::model::employee::{Employee, EmployeePatch, EmployeeSummary, NewEmployee};

#[cfg(test)]
pub mod memory;
pub mod mysql;
pub mod seed;

pub use mysql::MySqlEmployeeStore;

/// Outcome of a store operation that did not produce a result.
#[derive(Debug, Display, From, Error)]
pub enum EmployeeError {
    #[display(fmt = "No Employee found")]
    #[from(ignore)]
    NoEmployees,

    #[display(fmt = "Failed to add new employee")]
    #[from(ignore)]
    CreationFailed,

    #[display(fmt = "Employee not found")]
    #[from(ignore)]
    NotFound,

    #[display(fmt = "{}", _0)]
    Database(#[error(source)] sqlx::Error),
}

impl EmployeeError {
    /// True for the application-level "nothing there" outcomes.
    pub fn is_not_found(&self) -> bool {
        !matches!(self, EmployeeError::Database(_))
    }
}

/// Persistence operations behind the employee routes.
///
/// Handlers receive an implementation as `web::Data<dyn EmployeeStore>`.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Drops and recreates the employees table, then inserts the sample rows.
    /// Returns the number of rows inserted.
    async fn seed(&self) -> Result<u64, EmployeeError>;

    /// Every row without timestamps. Fails with `NoEmployees` when the table is empty.
    async fn fetch_all(&self) -> Result<Vec<EmployeeSummary>, EmployeeError>;

    async fn add_new(&self, employee: NewEmployee) -> Result<Employee, EmployeeError>;

    async fn update_by_id(&self, id: u64, patch: EmployeePatch) -> Result<Employee, EmployeeError>;

    async fn delete_by_id(&self, id: u64) -> Result<(), EmployeeError>;
}
