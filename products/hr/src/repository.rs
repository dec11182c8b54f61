use anyhow::Result;
use async_trait::async_trait;

use crate::model::{Employee, EmployeeId};

/// Persistence primitives the employee operations are written against.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every stored employee, ordered by id.
    async fn find_all(&self) -> Result<Vec<Employee>>;

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>>;

    async fn exists_by_id(&self, id: EmployeeId) -> Result<bool>;

    /// Insert when `employee.id` is `None` (assigning the next id), otherwise
    /// overwrite the record stored under that id.
    async fn save(&self, employee: Employee) -> Result<Employee>;

    /// Fails when nothing is stored under `id`.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<()>;

    /// Cheap reachability probe used by health checks.
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
