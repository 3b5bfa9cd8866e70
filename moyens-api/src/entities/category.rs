use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(column_name = "nom")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vehicle::Entity")]
    Vehicles,
    #[sea_orm(has_many = "super::compatibility::Entity")]
    Compatibilities,
    #[sea_orm(has_many = "super::default_assignment::Entity")]
    DefaultAssignments,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicles.def()
    }
}

impl Related<super::compatibility::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Compatibilities.def()
    }
}

impl Related<super::default_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DefaultAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
