use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};
use serde_aux::field_attributes::{
    deserialize_number_from_string, deserialize_option_number_from_string,
};
use utoipa::ToSchema;

use crate::utils::db_utils::SqlValue;

/// A full row of the `employees` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[schema(example = 11)]
    pub id: u64,

    #[schema(example = "Jane Smith")]
    pub name: String,

    #[schema(example = "Software Engineer")]
    pub designation: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = 75000)]
    #[serde(serialize_with = "serialize_salary")]
    pub salary: f64,

    #[schema(example = "2024-01-01T09:30:00", value_type = String)]
    pub created_at: NaiveDateTime,

    #[schema(example = "2024-01-01T09:30:00", value_type = String)]
    pub updated_at: NaiveDateTime,
}

/// Writes whole salaries as JSON integers (`80000`, not `80000.0`).
fn serialize_salary<S: Serializer>(salary: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if salary.fract() == 0.0 && salary.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*salary as i64)
    } else {
        serializer.serialize_f64(*salary)
    }
}

/// Employee row without the bookkeeping timestamps, as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct EmployeeSummary {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "Manager")]
    pub designation: String,
    #[schema(example = "Sales")]
    pub department: String,
    #[schema(example = 90000)]
    #[serde(serialize_with = "serialize_salary")]
    pub salary: f64,
}

impl From<Employee> for EmployeeSummary {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            designation: employee.designation,
            department: employee.department,
            salary: employee.salary,
        }
    }
}

/// Fields accepted when creating an employee. The id is assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewEmployee {
    #[schema(example = "Jane Smith")]
    pub name: String,
    #[schema(example = "Software Engineer")]
    pub designation: String,
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = 75000)]
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub salary: f64,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EmployeePatch {
    #[schema(example = "Jane Smith")]
    pub name: Option<String>,
    #[schema(example = "Senior Software Engineer")]
    pub designation: Option<String>,
    #[schema(example = "Engineering")]
    pub department: Option<String>,
    #[schema(example = 80000)]
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub salary: Option<f64>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.designation.is_none()
            && self.department.is_none()
            && self.salary.is_none()
    }

    /// Column/value pairs for every field present in the patch.
    pub fn assignments(&self) -> Vec<(&'static str, SqlValue)> {
        let mut columns = Vec::with_capacity(4);

        if let Some(name) = &self.name {
            columns.push(("name", SqlValue::String(name.clone())));
        }
        if let Some(designation) = &self.designation {
            columns.push(("designation", SqlValue::String(designation.clone())));
        }
        if let Some(department) = &self.department {
            columns.push(("department", SqlValue::String(department.clone())));
        }
        if let Some(salary) = self.salary {
            columns.push(("salary", SqlValue::F64(salary)));
        }

        columns
    }

    /// Applies the present fields to an in-memory record.
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(name) = &self.name {
            employee.name = name.clone();
        }
        if let Some(designation) = &self.designation {
            employee.designation = designation.clone();
        }
        if let Some(department) = &self.department {
            employee.department = department.clone();
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
    }
}
