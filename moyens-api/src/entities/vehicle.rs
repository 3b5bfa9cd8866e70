//! Rolling equipment ("moyens roulants"). Every row belongs to one category;
//! the foreign key is enforced by the database.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "moyens_roulants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(column_name = "nom")]
    pub name: String,
    #[sea_orm(column_name = "categorie_id")]
    pub category_id: i32,
    #[sea_orm(column_name = "roues", nullable)]
    pub wheel_count: Option<i32>,
    #[sea_orm(column_name = "emplacement", nullable)]
    pub location: Option<String>,
    #[sea_orm(column_name = "type_base", nullable)]
    pub base_type: Option<String>,
    #[sea_orm(column_name = "taille", nullable)]
    pub size: Option<String>,
    #[sea_orm(column_name = "departement", nullable)]
    pub department: Option<String>,
    #[sea_orm(nullable)]
    pub image: Option<String>,
    #[sea_orm(column_name = "prix", column_type = "Double", nullable)]
    pub price: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
