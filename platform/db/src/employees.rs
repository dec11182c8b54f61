use anyhow::{Result, bail};
use async_trait::async_trait;
use entity::employee;
use products_hr::{Employee, EmployeeId, EmployeeRepository};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder, Statement,
};

use crate::DbPool;

/// `EmployeeRepository` over the `employee` table.
#[derive(Clone, Debug)]
pub struct SeaOrmEmployeeRepository {
    db: DbPool,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}

fn to_employee(model: employee::Model) -> Employee {
    Employee {
        id: Some(model.employee_id),
        first_name: model.employee_first_name,
        last_name: model.employee_last_name,
        email: model.employee_email,
    }
}

fn to_active(employee: Employee) -> employee::ActiveModel {
    employee::ActiveModel {
        employee_id: employee.id.map_or(NotSet, Set),
        employee_first_name: Set(employee.first_name),
        employee_last_name: Set(employee.last_name),
        employee_email: Set(employee.email),
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>> {
        let rows = employee::Entity::find()
            .order_by_asc(employee::Column::EmployeeId)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(to_employee).collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>> {
        let row = employee::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(to_employee))
    }

    async fn exists_by_id(&self, id: EmployeeId) -> Result<bool> {
        let count = employee::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn save(&self, employee: Employee) -> Result<Employee> {
        let model = match employee.id {
            None => to_active(employee).insert(&self.db).await?,
            Some(id) => {
                let stored = employee::Entity::find_by_id(id).one(&self.db).await?;
                let active = to_active(employee);
                if stored.is_some() {
                    active.update(&self.db).await?
                } else {
                    active.insert(&self.db).await?
                }
            }
        };
        Ok(to_employee(model))
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<()> {
        let result = employee::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            bail!("no employee stored under id {id}");
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let backend = self.db.get_database_backend();
        self.db
            .execute(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }
}
