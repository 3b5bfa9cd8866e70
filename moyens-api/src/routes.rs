//! Route table and handlers.
//!
//! Handlers parse the path identifier, call one [`CatalogStore`] operation
//! and turn its outcome into a response; nothing else happens here.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use utoipa::OpenApi;

use crate::{
    catalog::CatalogStore,
    errors::ApiError,
    models::{AccessoryDetail, AccessorySummary, Category, ErrorBody, Vehicle, Welcome},
};

pub type SharedCatalog = Arc<dyn CatalogStore>;

pub const WELCOME_MESSAGE: &str = "Bienvenue sur l'API Moyens Logistiques !";

/// Parses a path identifier: a non-negative integer that fits the
/// database's `integer` type.
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] carrying `message` for anything else.
pub fn parse_id(raw: &str, message: &'static str) -> Result<i32, ApiError> {
    raw.parse::<u32>()
        .ok()
        .and_then(|id| i32::try_from(id).ok())
        .ok_or_else(|| ApiError::bad_request(message, raw))
}

const INVALID_ID: &str = "ID invalide";
const INVALID_CATEGORY_ID: &str = "ID de catégorie invalide";
const INVALID_VEHICLE_ID: &str = "ID de moyen invalide";

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = Welcome)),
    tag = "meta"
)]
pub async fn welcome() -> Json<Welcome> {
    Json(Welcome {
        message: WELCOME_MESSAGE.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Every category", body = [Category]),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(catalog): State<SharedCatalog>,
) -> Result<Json<Vec<Category>>, ApiError> {
    catalog.list_categories().await.map(Json)
}

#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(("id" = u32, Path, description = "Category id")),
    responses(
        (status = 200, description = "The requested category", body = Category),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Category not found", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(catalog): State<SharedCatalog>,
    Path(raw): Path<String>,
) -> Result<Json<Category>, ApiError> {
    let id = parse_id(&raw, INVALID_ID)?;
    catalog.get_category(id).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/categories/{id}/accessoires_defauts",
    params(("id" = u32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Accessories assigned by default to the category", body = [AccessorySummary]),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    ),
    tag = "categories"
)]
pub async fn list_category_default_accessories(
    State(catalog): State<SharedCatalog>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<AccessorySummary>>, ApiError> {
    let id = parse_id(&raw, INVALID_CATEGORY_ID)?;
    catalog
        .list_default_accessories_for_category(id)
        .await
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/categories/{id}/accessoires",
    params(("id" = u32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Accessories compatible with the category", body = [AccessorySummary]),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    ),
    tag = "categories"
)]
pub async fn list_category_compatible_accessories(
    State(catalog): State<SharedCatalog>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<AccessorySummary>>, ApiError> {
    let id = parse_id(&raw, INVALID_CATEGORY_ID)?;
    catalog
        .list_compatible_accessories_for_category(id)
        .await
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/accessoires",
    responses(
        (status = 200, description = "Every accessory", body = [AccessorySummary]),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    ),
    tag = "accessoires"
)]
pub async fn list_accessories(
    State(catalog): State<SharedCatalog>,
) -> Result<Json<Vec<AccessorySummary>>, ApiError> {
    catalog.list_accessories().await.map(Json)
}

#[utoipa::path(
    get,
    path = "/accessoires/{id}",
    params(("id" = u32, Path, description = "Accessory id")),
    responses(
        (status = 200, description = "The requested accessory", body = AccessorySummary),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Accessory not found", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    ),
    tag = "accessoires"
)]
pub async fn get_accessory(
    State(catalog): State<SharedCatalog>,
    Path(raw): Path<String>,
) -> Result<Json<AccessorySummary>, ApiError> {
    let id = parse_id(&raw, INVALID_ID)?;
    catalog.get_accessory(id).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/moyens",
    responses(
        (status = 200, description = "Every vehicle", body = [Vehicle]),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    ),
    tag = "moyens"
)]
pub async fn list_vehicles(
    State(catalog): State<SharedCatalog>,
) -> Result<Json<Vec<Vehicle>>, ApiError> {
    catalog.list_vehicles().await.map(Json)
}

#[utoipa::path(
    get,
    path = "/moyens/{id}",
    params(("id" = u32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "The requested vehicle", body = Vehicle),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Vehicle not found", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    ),
    tag = "moyens"
)]
pub async fn get_vehicle(
    State(catalog): State<SharedCatalog>,
    Path(raw): Path<String>,
) -> Result<Json<Vehicle>, ApiError> {
    let id = parse_id(&raw, INVALID_ID)?;
    catalog.get_vehicle(id).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/moyens/{id}/accessoires_defauts",
    params(("id" = u32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Accessories assigned by default to the vehicle's category", body = [AccessoryDetail]),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Vehicle not found", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    ),
    tag = "moyens"
)]
pub async fn list_vehicle_default_accessories(
    State(catalog): State<SharedCatalog>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<AccessoryDetail>>, ApiError> {
    let id = parse_id(&raw, INVALID_VEHICLE_ID)?;
    catalog
        .list_default_accessories_for_vehicle(id)
        .await
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/moyens/{id}/accessoires",
    params(("id" = u32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Accessories compatible with the vehicle's category", body = [AccessoryDetail]),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Vehicle not found", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    ),
    tag = "moyens"
)]
pub async fn list_vehicle_compatible_accessories(
    State(catalog): State<SharedCatalog>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<AccessoryDetail>>, ApiError> {
    let id = parse_id(&raw, INVALID_VEHICLE_ID)?;
    catalog
        .list_compatible_accessories_for_vehicle(id)
        .await
        .map(Json)
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Moyens Logistiques API", description = "Read-only catalog of categories, accessories and rolling equipment"),
    paths(
        welcome,
        list_categories,
        get_category,
        list_category_default_accessories,
        list_category_compatible_accessories,
        list_accessories,
        get_accessory,
        list_vehicles,
        get_vehicle,
        list_vehicle_default_accessories,
        list_vehicle_compatible_accessories,
    ),
    components(schemas(Category, AccessorySummary, AccessoryDetail, Vehicle, Welcome, ErrorBody))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// The fixed route table, bound to `catalog`.
pub fn router(catalog: SharedCatalog) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/categories", get(list_categories))
        .route("/categories/{id}", get(get_category))
        .route(
            "/categories/{id}/accessoires_defauts",
            get(list_category_default_accessories),
        )
        .route(
            "/categories/{id}/accessoires",
            get(list_category_compatible_accessories),
        )
        .route("/accessoires", get(list_accessories))
        .route("/accessoires/{id}", get(get_accessory))
        .route("/moyens", get(list_vehicles))
        .route("/moyens/{id}", get(get_vehicle))
        .route(
            "/moyens/{id}/accessoires_defauts",
            get(list_vehicle_default_accessories),
        )
        .route(
            "/moyens/{id}/accessoires",
            get(list_vehicle_compatible_accessories),
        )
        .route("/openapi.json", get(openapi_json))
        .with_state(catalog)
}
