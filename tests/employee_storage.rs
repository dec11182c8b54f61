use std::sync::Arc;

use anyhow::Result;
use platform_db::{SeaOrmEmployeeRepository, seed_employees};
use products_hr::{Employee, EmployeeRepository, EmployeeService, HrError};
use suite_tests::PgTestContext;

#[tokio::test]
async fn sequence_assigns_ids_from_one() -> Result<()> {
    let Some(ctx) = PgTestContext::new_migrated().await else {
        return Ok(());
    };
    let repo = SeaOrmEmployeeRepository::new(ctx.db.clone());

    let first = repo.save(Employee::new("Ann", "Lee", "ann@x.com")).await?;
    let second = repo.save(Employee::new("Bo", "Kim", "bo@x.com")).await?;
    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));
    assert!(repo.exists_by_id(2).await?);
    assert!(!repo.exists_by_id(3).await?);

    ctx.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn service_round_trip_against_postgres() -> Result<()> {
    let Some(ctx) = PgTestContext::new_migrated().await else {
        return Ok(());
    };
    let service = EmployeeService::new(Arc::new(SeaOrmEmployeeRepository::new(ctx.db.clone())));

    service
        .add_employee(Employee::new("Ann", "Lee", "ann@x.com"))
        .await?;
    let all = service.list_employees().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, Some(1));

    let updated = service
        .update_employee(1, Employee::new("Ann", "Smith", "ann@x.com"))
        .await?;
    assert_eq!(updated.id, Some(1));
    assert_eq!(updated.last_name, "Smith");
    assert_eq!(service.employee_by_id(1).await?, Some(updated));

    service.delete_employee(1).await?;
    assert!(matches!(
        service.employee_by_id(1).await,
        Err(HrError::InvalidState(_))
    ));
    assert!(matches!(
        service
            .update_employee(1, Employee::new("A", "B", "C"))
            .await,
        Err(HrError::ResourceNotFound(_))
    ));
    assert!(service.storage_ok().await);

    ctx.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn seeding_only_fills_an_empty_table() -> Result<()> {
    let Some(ctx) = PgTestContext::new_migrated().await else {
        return Ok(());
    };

    let inserted = seed_employees(&ctx.db).await?;
    assert!(inserted > 0);
    assert_eq!(seed_employees(&ctx.db).await?, 0);

    let repo = SeaOrmEmployeeRepository::new(ctx.db.clone());
    assert_eq!(repo.find_all().await?.len(), inserted);

    ctx.cleanup().await;
    Ok(())
}
