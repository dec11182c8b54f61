use sea_orm_migration::prelude::*;

// Ids come from a dedicated sequence with an allocation size of one, so the
// first employee saved gets id 1 and every later save takes the next value.
const UP_SQL: &str = r#"
CREATE SEQUENCE IF NOT EXISTS employee_sequence START WITH 1 INCREMENT BY 1;

CREATE TABLE IF NOT EXISTS employee (
    employee_id bigint PRIMARY KEY DEFAULT nextval('employee_sequence'),
    employee_first_name varchar(255) NOT NULL,
    employee_last_name varchar(255) NOT NULL,
    employee_email varchar(255) NOT NULL
);

ALTER SEQUENCE employee_sequence OWNED BY employee.employee_id;
"#;

const DOWN_SQL: &str = r#"
DROP TABLE IF EXISTS employee;
DROP SEQUENCE IF EXISTS employee_sequence;
"#;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(UP_SQL)
            .await
            .map(|_| ())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(DOWN_SQL)
            .await
            .map(|_| ())
    }
}
