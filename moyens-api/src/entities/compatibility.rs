//! Accessories a category's vehicles may be paired with.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "compatibilites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "categorie_id")]
    pub category_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "accessoire_id")]
    pub accessory_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::accessory::Entity",
        from = "Column::AccessoryId",
        to = "super::accessory::Column::Id"
    )]
    Accessory,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::accessory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accessory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
