use sea_orm::entity::prelude::*;

/// A sport document keyed by its unique name.
///
/// `schedules` holds the embedded schedule documents as a JSON array.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sport")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub sport_name: String,
    #[sea_orm(column_type = "Json")]
    pub schedules: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
