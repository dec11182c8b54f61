use anyhow::Result;
use entity::employee;
use products_hr::{Employee, EmployeeRepository};
use sea_orm::{EntityTrait, PaginatorTrait};
use tracing::info;

use crate::{DbPool, SeaOrmEmployeeRepository};

const DEMO_EMPLOYEES: &[(&str, &str, &str)] = &[
    ("Ann", "Lee", "ann.lee@example.com"),
    ("Ravi", "Patel", "ravi.patel@example.com"),
    ("Mia", "Novak", "mia.novak@example.com"),
];

/// Insert the demo employees unless the table already holds rows.
/// Returns how many rows were inserted.
pub async fn seed_employees(db: &DbPool) -> Result<usize> {
    let existing = employee::Entity::find().count(db).await?;
    if existing > 0 {
        info!(existing, "employee table not empty; skipping seed");
        return Ok(0);
    }
    let repo = SeaOrmEmployeeRepository::new(db.clone());
    for (first, last, email) in DEMO_EMPLOYEES {
        repo.save(Employee::new(*first, *last, *email)).await?;
    }
    info!(inserted = DEMO_EMPLOYEES.len(), "seeded demo employees");
    Ok(DEMO_EMPLOYEES.len())
}
