//! HR vertical slice: employee records and the operations exposed over them.

pub mod error;
pub mod memory;
pub mod model;
pub mod repository;
pub mod service;

pub use error::{HrError, HrResult};
pub use memory::InMemoryEmployeeRepository;
pub use model::{Employee, EmployeeId};
pub use repository::EmployeeRepository;
pub use service::EmployeeService;
