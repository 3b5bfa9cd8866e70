//! Data access: one operation per resource query.
//!
//! Handlers only see the [`CatalogStore`] trait. [`SeaOrmCatalog`] is the
//! database-backed implementation; every value reaches SQL as a bound
//! parameter through the query builder.
//!
//! Outcomes:
//! - a list query with no rows is an empty `Vec`, never an error;
//! - a missing row on a primary-key lookup (including the vehicle
//!   resolution step) is [`ApiError::NotFound`];
//! - any database failure is [`ApiError::Database`].

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::{
    entities::{accessory, category, compatibility, default_assignment, vehicle},
    errors::ApiError,
    models::{AccessoryDetail, AccessorySummary, Category, Vehicle},
};

#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    async fn get_category(&self, id: i32) -> Result<Category, ApiError>;

    async fn list_accessories(&self) -> Result<Vec<AccessorySummary>, ApiError>;

    async fn get_accessory(&self, id: i32) -> Result<AccessorySummary, ApiError>;

    async fn list_default_accessories_for_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<AccessorySummary>, ApiError>;

    async fn list_compatible_accessories_for_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<AccessorySummary>, ApiError>;

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, ApiError>;

    async fn get_vehicle(&self, id: i32) -> Result<Vehicle, ApiError>;

    /// Accessories compatible with the vehicle's own category.
    async fn list_compatible_accessories_for_vehicle(
        &self,
        vehicle_id: i32,
    ) -> Result<Vec<AccessoryDetail>, ApiError>;

    /// Accessories assigned by default to the vehicle's own category.
    async fn list_default_accessories_for_vehicle(
        &self,
        vehicle_id: i32,
    ) -> Result<Vec<AccessoryDetail>, ApiError>;
}

/// Which association table links a category to its accessories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Association {
    Compatible,
    Default,
}

#[derive(Clone, Debug)]
pub struct SeaOrmCatalog {
    db: DatabaseConnection,
}

impl SeaOrmCatalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// `SELECT a.id, a.nom FROM liste_accessoire a`
    fn accessory_summaries() -> Select<accessory::Entity> {
        accessory::Entity::find()
            .select_only()
            .column_as(accessory::Column::Id, "id")
            .column_as(accessory::Column::Name, "name")
            .order_by_asc(accessory::Column::Id)
    }

    /// `SELECT a.id, a.nom, a.image, a.prix FROM liste_accessoire a`
    fn accessory_details() -> Select<accessory::Entity> {
        accessory::Entity::find()
            .select_only()
            .column_as(accessory::Column::Id, "id")
            .column_as(accessory::Column::Name, "name")
            .column_as(accessory::Column::Image, "image")
            .column_as(accessory::Column::Price, "price")
            .order_by_asc(accessory::Column::Id)
    }

    /// Restricts an accessory select to those linked to `category_id`
    /// through the given association.
    fn linked_to(
        select: Select<accessory::Entity>,
        association: Association,
        category_id: i32,
    ) -> Select<accessory::Entity> {
        match association {
            Association::Compatible => select
                .inner_join(compatibility::Entity)
                .filter(compatibility::Column::CategoryId.eq(category_id)),
            Association::Default => select
                .inner_join(default_assignment::Entity)
                .filter(default_assignment::Column::CategoryId.eq(category_id)),
        }
    }

    async fn category_accessories(
        &self,
        association: Association,
        category_id: i32,
    ) -> Result<Vec<AccessorySummary>, ApiError> {
        Self::linked_to(Self::accessory_summaries(), association, category_id)
            .into_model::<AccessorySummary>()
            .all(&self.db)
            .await
            .map_err(|err| {
                let message = match association {
                    Association::Compatible => {
                        "Erreur lors de la récupération des accessoires compatibles"
                    }
                    Association::Default => {
                        "Erreur lors de la récupération des accessoires par défaut"
                    }
                };
                ApiError::database(message, Some(category_id), err)
            })
    }

    /// Resolves the vehicle's category, then lists that category's
    /// accessories. A missing vehicle short-circuits to NotFound.
    async fn vehicle_accessories(
        &self,
        association: Association,
        vehicle_id: i32,
    ) -> Result<Vec<AccessoryDetail>, ApiError> {
        let category_id = vehicle::Entity::find_by_id(vehicle_id)
            .select_only()
            .column(vehicle::Column::CategoryId)
            .into_tuple::<i32>()
            .one(&self.db)
            .await
            .map_err(|err| {
                ApiError::database("Erreur lors de la recherche du moyen roulant", Some(vehicle_id), err)
            })?
            .ok_or_else(|| ApiError::not_found("Moyen roulant introuvable", vehicle_id))?;

        tracing::debug!(vehicle_id, category_id, ?association, "Resolved vehicle category");

        Self::linked_to(Self::accessory_details(), association, category_id)
            .into_model::<AccessoryDetail>()
            .all(&self.db)
            .await
            .map_err(|err| {
                ApiError::database("Erreur récupération accessoires", Some(category_id), err)
            })
    }
}

#[async_trait]
impl CatalogStore for SeaOrmCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let models = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await
            .map_err(|err| {
                ApiError::database("Erreur lors de la récupération des catégories", None, err)
            })?;
        Ok(models.into_iter().map(Category::from).collect())
    }

    async fn get_category(&self, id: i32) -> Result<Category, ApiError> {
        category::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|err| {
                ApiError::database("Erreur lors de la récupération de la catégorie", Some(id), err)
            })?
            .map(Category::from)
            .ok_or_else(|| ApiError::not_found("Catégorie non trouvée", id))
    }

    async fn list_accessories(&self) -> Result<Vec<AccessorySummary>, ApiError> {
        Self::accessory_summaries()
            .into_model::<AccessorySummary>()
            .all(&self.db)
            .await
            .map_err(|err| {
                ApiError::database("Erreur lors de la récupération des accessoires", None, err)
            })
    }

    async fn get_accessory(&self, id: i32) -> Result<AccessorySummary, ApiError> {
        Self::accessory_summaries()
            .filter(accessory::Column::Id.eq(id))
            .into_model::<AccessorySummary>()
            .one(&self.db)
            .await
            .map_err(|err| {
                ApiError::database("Erreur lors de la récupération de l'accessoire", Some(id), err)
            })?
            .ok_or_else(|| ApiError::not_found("Accessoire non trouvé", id))
    }

    async fn list_default_accessories_for_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<AccessorySummary>, ApiError> {
        self.category_accessories(Association::Default, category_id)
            .await
    }

    async fn list_compatible_accessories_for_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<AccessorySummary>, ApiError> {
        self.category_accessories(Association::Compatible, category_id)
            .await
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, ApiError> {
        let models = vehicle::Entity::find()
            .order_by_asc(vehicle::Column::Id)
            .all(&self.db)
            .await
            .map_err(|err| {
                ApiError::database("Erreur lors de la récupération des moyens roulants", None, err)
            })?;
        Ok(models.into_iter().map(Vehicle::from).collect())
    }

    async fn get_vehicle(&self, id: i32) -> Result<Vehicle, ApiError> {
        vehicle::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|err| {
                ApiError::database("Erreur lors de la récupération du moyen roulant", Some(id), err)
            })?
            .map(Vehicle::from)
            .ok_or_else(|| ApiError::not_found("Moyen roulant non trouvé", id))
    }

    async fn list_compatible_accessories_for_vehicle(
        &self,
        vehicle_id: i32,
    ) -> Result<Vec<AccessoryDetail>, ApiError> {
        self.vehicle_accessories(Association::Compatible, vehicle_id)
            .await
    }

    async fn list_default_accessories_for_vehicle(
        &self,
        vehicle_id: i32,
    ) -> Result<Vec<AccessoryDetail>, ApiError> {
        self.vehicle_accessories(Association::Default, vehicle_id)
            .await
    }
}
