//! SeaORM entities backing the employee service.

pub mod employee;
