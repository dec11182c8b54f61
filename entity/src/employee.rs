use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Row of the `employee` table. The key is drawn from `employee_sequence`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub employee_id: i64,
    pub employee_first_name: String,
    pub employee_last_name: String,
    pub employee_email: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations")
    }
}

impl ActiveModelBehavior for ActiveModel {}
