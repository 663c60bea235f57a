use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use tracing::{debug, info, instrument};

use super::seed::SEED_EMPLOYEES;
use super::{EmployeeError, EmployeeStore};
use crate::model::employee::{Employee, EmployeePatch, EmployeeSummary, NewEmployee};
use crate::utils::db_utils::{build_update_sql, execute_update};

const EMPLOYEES_TABLE: &str = "employees";

const CREATE_EMPLOYEES_TABLE: &str = r#"
    CREATE TABLE employees (
        id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        designation VARCHAR(255) NOT NULL,
        department VARCHAR(255) NOT NULL,
        salary DOUBLE NOT NULL,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP
    )
"#;

/// Bulk insert of the sample employees, one bound row per entry.
fn seed_insert() -> QueryBuilder<'static, MySql> {
    let mut builder: QueryBuilder<MySql> = QueryBuilder::new(
        "INSERT INTO employees (id, name, designation, department, salary) ",
    );
    builder.push_values(SEED_EMPLOYEES.iter(), |mut row, employee| {
        row.push_bind(employee.id)
            .push_bind(employee.name)
            .push_bind(employee.designation)
            .push_bind(employee.department)
            .push_bind(employee.salary);
    });
    builder
}

/// `EmployeeStore` backed by the `employees` table in MySQL.
#[derive(Clone)]
pub struct MySqlEmployeeStore {
    pool: MySqlPool,
}

impl MySqlEmployeeStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, designation, department, salary, created_at, updated_at
            FROM employees
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}

#[async_trait]
impl EmployeeStore for MySqlEmployeeStore {
    #[instrument(skip(self))]
    async fn seed(&self) -> Result<u64, EmployeeError> {
        sqlx::query("DROP TABLE IF EXISTS employees")
            .execute(&self.pool)
            .await?;
        sqlx::query(CREATE_EMPLOYEES_TABLE)
            .execute(&self.pool)
            .await?;

        let mut builder = seed_insert();
        let result = builder.build().execute(&self.pool).await?;
        info!(rows = result.rows_affected(), "Employees table seeded");

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<EmployeeSummary>, EmployeeError> {
        let employees = sqlx::query_as::<_, EmployeeSummary>(
            "SELECT id, name, designation, department, salary FROM employees",
        )
        .fetch_all(&self.pool)
        .await?;

        if employees.is_empty() {
            return Err(EmployeeError::NoEmployees);
        }

        Ok(employees)
    }

    #[instrument(skip(self, employee), fields(name = %employee.name))]
    async fn add_new(&self, employee: NewEmployee) -> Result<Employee, EmployeeError> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees (name, designation, department, salary)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.designation)
        .bind(&employee.department)
        .bind(employee.salary)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id();
        debug!(id, "Employee inserted");

        self.find_by_id(id)
            .await?
            .ok_or(EmployeeError::CreationFailed)
    }

    #[instrument(skip(self, patch))]
    async fn update_by_id(&self, id: u64, patch: EmployeePatch) -> Result<Employee, EmployeeError> {
        let existing = self.find_by_id(id).await?.ok_or(EmployeeError::NotFound)?;

        let Some(update) = build_update_sql(EMPLOYEES_TABLE, patch.assignments(), "id", id) else {
            debug!("Empty patch, nothing to update");
            return Ok(existing);
        };

        debug!(sql = %update.sql, "Updating employee");
        execute_update(&self.pool, update).await?;

        // Deleted between the lookup and the read-back.
        self.find_by_id(id).await?.ok_or(EmployeeError::NotFound)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: u64) -> Result<(), EmployeeError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(EmployeeError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_insert_binds_every_sample_row() {
        let builder = seed_insert();
        let sql = builder.sql();

        assert!(sql.starts_with(
            "INSERT INTO employees (id, name, designation, department, salary) VALUES "
        ));
        assert_eq!(sql.matches("(?, ?, ?, ?, ?)").count(), SEED_EMPLOYEES.len());
    }

    #[test]
    fn create_table_has_auto_id_and_managed_timestamps() {
        let ddl = CREATE_EMPLOYEES_TABLE;

        assert!(ddl.contains("id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY"));
        assert!(ddl.contains("created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP"));
        assert!(ddl.contains("ON UPDATE CURRENT_TIMESTAMP"));
    }

    #[test]
    fn salary_patch_updates_only_salary_column() {
        let patch = EmployeePatch {
            salary: Some(80000.0),
            ..Default::default()
        };
        let update = build_update_sql(EMPLOYEES_TABLE, patch.assignments(), "id", 7).unwrap();

        assert_eq!(update.sql, "UPDATE employees SET salary = ? WHERE id = ?");
    }

    async fn live_store() -> MySqlEmployeeStore {
        let url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must point at a disposable MySQL database");
        let pool = MySqlPool::connect(&url).await.unwrap();
        MySqlEmployeeStore::new(pool)
    }

    /// Drops the `employees` table of the target database.
    #[actix_web::test]
    #[ignore = "needs TEST_DATABASE_URL pointing at a disposable MySQL database"]
    async fn seed_and_crud_round_trip() {
        let store = live_store().await;

        assert_eq!(store.seed().await.unwrap(), 10);
        let all = store.fetch_all().await.unwrap();
        assert_eq!(all.len(), 10);

        let created = store
            .add_new(NewEmployee {
                name: "Jane Smith".into(),
                designation: "Software Engineer".into(),
                department: "Engineering".into(),
                salary: 75000.0,
            })
            .await
            .unwrap();
        assert!(all.iter().all(|e| e.id != created.id));
        assert_eq!(created.name, "Jane Smith");
        assert_eq!(created.salary, 75000.0);

        let updated = store
            .update_by_id(
                created.id,
                EmployeePatch {
                    salary: Some(80000.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.salary, 80000.0);
        assert_eq!(updated.designation, "Software Engineer");

        let missing = store
            .update_by_id(9999, EmployeePatch::default())
            .await
            .unwrap_err();
        assert!(matches!(missing, EmployeeError::NotFound));

        store.delete_by_id(created.id).await.unwrap();
        assert!(matches!(
            store.delete_by_id(created.id).await.unwrap_err(),
            EmployeeError::NotFound
        ));

        for employee in store.fetch_all().await.unwrap() {
            store.delete_by_id(employee.id).await.unwrap();
        }
        assert!(matches!(
            store.fetch_all().await.unwrap_err(),
            EmployeeError::NoEmployees
        ));
    }
}
