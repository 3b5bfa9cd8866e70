use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "liste_accessoire")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(column_name = "nom")]
    pub name: String,
    #[sea_orm(nullable)]
    pub image: Option<String>,
    #[sea_orm(column_name = "prix", column_type = "Double", nullable)]
    pub price: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::compatibility::Entity")]
    Compatibilities,
    #[sea_orm(has_many = "super::default_assignment::Entity")]
    DefaultAssignments,
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
