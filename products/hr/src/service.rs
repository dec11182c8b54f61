use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    error::{HrError, HrResult},
    model::{Employee, EmployeeId},
    repository::EmployeeRepository,
};

/// Employee operations behind the `/api/v1` routes.
///
/// Holds no state of its own; every call goes straight to the repository.
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    #[instrument(name = "hr.employees.list", skip_all)]
    pub async fn list_employees(&self) -> HrResult<Vec<Employee>> {
        Ok(self.repository.find_all().await?)
    }

    /// Persist a new employee. Any id carried by the payload is dropped so
    /// storage always assigns a fresh one.
    #[instrument(name = "hr.employees.add", skip_all)]
    pub async fn add_employee(&self, mut employee: Employee) -> HrResult<Employee> {
        info!(%employee, "adding employee");
        employee.id = None;
        Ok(self.repository.save(employee).await?)
    }

    /// Existence is checked first and the record fetched afterwards, so the
    /// returned option is only `None` if the row vanished in between.
    #[instrument(name = "hr.employees.get", skip(self))]
    pub async fn employee_by_id(&self, id: EmployeeId) -> HrResult<Option<Employee>> {
        if !self.repository.exists_by_id(id).await? {
            return Err(HrError::invalid_state(id));
        }
        Ok(self.repository.find_by_id(id).await?)
    }

    #[instrument(name = "hr.employees.update", skip(self, details))]
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        details: Employee,
    ) -> HrResult<Employee> {
        let mut employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| HrError::resource_not_found(id))?;
        employee.merge_details(details);
        Ok(self.repository.save(employee).await?)
    }

    #[instrument(name = "hr.employees.delete", skip(self))]
    pub async fn delete_employee(&self, id: EmployeeId) -> HrResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(HrError::invalid_state(id));
        }
        self.repository.delete_by_id(id).await?;
        Ok(())
    }

    pub async fn storage_ok(&self) -> bool {
        self.repository.ping().await.is_ok()
    }
}
