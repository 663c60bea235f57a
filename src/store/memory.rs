use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::seed::SEED_EMPLOYEES;
use super::{EmployeeError, EmployeeStore};
use crate::model::employee::{Employee, EmployeePatch, EmployeeSummary, NewEmployee};

#[derive(Default)]
struct Table {
    rows: Vec<Employee>,
    next_id: u64,
}

/// In-memory `EmployeeStore` for handler tests.
#[derive(Default)]
pub struct MemoryEmployeeStore {
    table: Mutex<Table>,
}

impl MemoryEmployeeStore {
    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn seed(&self) -> Result<u64, EmployeeError> {
        let now = Utc::now().naive_utc();
        let mut table = self.table.lock().unwrap();

        table.rows = SEED_EMPLOYEES
            .iter()
            .map(|e| Employee {
                id: e.id,
                name: e.name.to_string(),
                designation: e.designation.to_string(),
                department: e.department.to_string(),
                salary: e.salary,
                created_at: now,
                updated_at: now,
            })
            .collect();
        table.next_id = SEED_EMPLOYEES.len() as u64 + 1;

        Ok(table.rows.len() as u64)
    }

    async fn fetch_all(&self) -> Result<Vec<EmployeeSummary>, EmployeeError> {
        let table = self.table.lock().unwrap();
        if table.rows.is_empty() {
            return Err(EmployeeError::NoEmployees);
        }
        Ok(table.rows.iter().cloned().map(EmployeeSummary::from).collect())
    }

    async fn add_new(&self, employee: NewEmployee) -> Result<Employee, EmployeeError> {
        let now = Utc::now().naive_utc();
        let mut table = self.table.lock().unwrap();

        table.next_id = table.next_id.max(1);
        let created = Employee {
            id: table.next_id,
            name: employee.name,
            designation: employee.designation,
            department: employee.department,
            salary: employee.salary,
            created_at: now,
            updated_at: now,
        };
        table.next_id += 1;
        table.rows.push(created.clone());

        Ok(created)
    }

    async fn update_by_id(&self, id: u64, patch: EmployeePatch) -> Result<Employee, EmployeeError> {
        let mut table = self.table.lock().unwrap();
        let employee = table
            .rows
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EmployeeError::NotFound)?;

        if !patch.is_empty() {
            patch.apply_to(employee);
            employee.updated_at = Utc::now().naive_utc();
        }

        Ok(employee.clone())
    }

    async fn delete_by_id(&self, id: u64) -> Result<(), EmployeeError> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|e| e.id != id);

        if table.rows.len() == before {
            return Err(EmployeeError::NotFound);
        }
        Ok(())
    }
}

/// Store whose every call fails as if the database were unreachable.
pub struct BrokenEmployeeStore;

fn unreachable_db() -> EmployeeError {
    EmployeeError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl EmployeeStore for BrokenEmployeeStore {
    async fn seed(&self) -> Result<u64, EmployeeError> {
        Err(unreachable_db())
    }

    async fn fetch_all(&self) -> Result<Vec<EmployeeSummary>, EmployeeError> {
        Err(unreachable_db())
    }

    async fn add_new(&self, _employee: NewEmployee) -> Result<Employee, EmployeeError> {
        Err(unreachable_db())
    }

    async fn update_by_id(&self, _id: u64, _patch: EmployeePatch) -> Result<Employee, EmployeeError> {
        Err(unreachable_db())
    }

    async fn delete_by_id(&self, _id: u64) -> Result<(), EmployeeError> {
        Err(unreachable_db())
    }
}
