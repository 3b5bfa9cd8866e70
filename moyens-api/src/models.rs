//! JSON representations returned by the API.
//!
//! Field names on the wire are the French column names (`nom`, `prix`, ...)
//! that existing consumers expect.

use crate::entities::{category, vehicle};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "nom")]
    pub name: String,
}

impl From<category::Model> for Category {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// Accessory as listed in the catalog and per category: identity only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, FromQueryResult)]
pub struct AccessorySummary {
    pub id: i32,
    #[serde(rename = "nom")]
    pub name: String,
}

/// Accessory as offered for a given vehicle, with what is needed to display
/// and price it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema, FromQueryResult)]
pub struct AccessoryDetail {
    pub id: i32,
    #[serde(rename = "nom")]
    pub name: String,
    pub image: Option<String>,
    #[serde(rename = "prix")]
    pub price: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Vehicle {
    pub id: i32,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "categorie_id")]
    pub category_id: i32,
    #[serde(rename = "roues")]
    pub wheel_count: Option<i32>,
    #[serde(rename = "emplacement")]
    pub location: Option<String>,
    #[serde(rename = "type_base")]
    pub base_type: Option<String>,
    #[serde(rename = "taille")]
    pub size: Option<String>,
    #[serde(rename = "departement")]
    pub department: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "prix")]
    pub price: Option<f64>,
}

impl From<vehicle::Model> for Vehicle {
    fn from(model: vehicle::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            category_id: model.category_id,
            wheel_count: model.wheel_count,
            location: model.location,
            base_type: model.base_type,
            size: model.size,
            department: model.department,
            image: model.image,
            price: model.price,
        }
    }
}

/// Body of the `GET /` greeting.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Welcome {
    pub message: String,
}

/// Body of every error response.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}
