use sea_orm::entity::prelude::*;

/// A soldier record.
///
/// `id` is assigned by the store on insert and never changes afterwards. `business_id` is the
/// externally supplied identifier all lookups are keyed on; its uniqueness is enforced by a
/// unique index created when the store connection is established.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "soldiers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub business_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: i64,
    pub rank: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
