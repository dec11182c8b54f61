use thiserror::Error;

use crate::model::EmployeeId;

pub type HrResult<T> = Result<T, HrError>;

#[derive(Debug, Error)]
pub enum HrError {
    /// Raised by lookups and deletes when the existence check fails.
    #[error("{0}")]
    InvalidState(String),
    /// Raised by updates when no stored record matches the id.
    #[error("{0}")]
    ResourceNotFound(String),
    #[error("storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl HrError {
    pub fn invalid_state(id: EmployeeId) -> Self {
        Self::InvalidState(missing_employee(id))
    }

    pub fn resource_not_found(id: EmployeeId) -> Self {
        Self::ResourceNotFound(missing_employee(id))
    }
}

fn missing_employee(id: EmployeeId) -> String {
    format!("Employee with ID: {id} does not exist")
}
