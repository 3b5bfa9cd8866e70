#![allow(dead_code)]

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use moyens_api::{
    build_app,
    config::{AllowedOrigins, HttpConfig},
    entities::{accessory, category, compatibility, default_assignment, vehicle},
};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, DbErr, Schema, Set};
use sea_orm_migration::prelude::*;
use tower::ServiceExt;

pub struct CatalogMigrator;

#[async_trait::async_trait]
impl MigratorTrait for CatalogMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateCatalogTables)]
    }
}

pub struct CreateCatalogTables;

impl MigrationName for CreateCatalogTables {
    fn name(&self) -> &str {
        "m20250101_000001_create_catalog_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateCatalogTables {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());
        manager
            .create_table(schema.create_table_from_entity(category::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(accessory::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(vehicle::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(compatibility::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(default_assignment::Entity))
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            "accessoire_defaut",
            "compatibilites",
            "moyens_roulants",
            "liste_accessoire",
            "categories",
        ] {
            manager
                .drop_table(Table::drop().table(Alias::new(table)).to_owned())
                .await?;
        }
        Ok(())
    }
}

/// Empty catalog schema in a fresh in-memory database.
pub async fn setup_empty_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    CatalogMigrator::up(&db, None).await?;
    Ok(db)
}

/// Catalog used across the suite:
///
/// | category | vehicles | compatible accessories | default accessories |
/// |----------|----------|------------------------|---------------------|
/// | 1 Vélos          | 11, 12 | 5, 6, 8 | 5 |
/// | 2 Trottinettes   | 10     | 7       | 8 |
/// | 3 Chariots       | none   | none    | none |
pub async fn setup_catalog_db() -> Result<DatabaseConnection, DbErr> {
    let db = setup_empty_db().await?;
    seed_catalog(&db).await?;
    Ok(db)
}

pub async fn seed_catalog(db: &DatabaseConnection) -> Result<(), DbErr> {
    for (id, name) in [(1, "Vélos"), (2, "Trottinettes"), (3, "Chariots")] {
        category::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
        }
        .insert(db)
        .await?;
    }

    for (id, name, image, price) in [
        (5, "Casque", Some("casque.png"), Some(25.0)),
        (6, "Antivol", None, Some(15.0)),
        (7, "Sacoche", Some("x.png"), Some(12.5)),
        (8, "Panier", None, None),
    ] {
        accessory::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            image: Set(image.map(str::to_string)),
            price: Set(price),
        }
        .insert(db)
        .await?;
    }

    vehicle::ActiveModel {
        id: Set(10),
        name: Set("Trottinette électrique".to_string()),
        category_id: Set(2),
        wheel_count: Set(Some(2)),
        location: Set(Some("Hall B".to_string())),
        base_type: Set(Some("Électrique".to_string())),
        size: Set(Some("Unique".to_string())),
        department: Set(Some("92".to_string())),
        image: Set(Some("trottinette.png".to_string())),
        price: Set(Some(399.9)),
    }
    .insert(db)
    .await?;

    vehicle::ActiveModel {
        id: Set(11),
        name: Set("Vélo cargo".to_string()),
        category_id: Set(1),
        wheel_count: Set(Some(3)),
        location: Set(Some("Atelier".to_string())),
        base_type: Set(Some("Musculaire".to_string())),
        size: Set(Some("L".to_string())),
        department: Set(Some("75".to_string())),
        image: Set(None),
        price: Set(Some(1450.0)),
    }
    .insert(db)
    .await?;

    vehicle::ActiveModel {
        id: Set(12),
        name: Set("VTT".to_string()),
        category_id: Set(1),
        wheel_count: Set(None),
        location: Set(None),
        base_type: Set(None),
        size: Set(None),
        department: Set(None),
        image: Set(None),
        price: Set(None),
    }
    .insert(db)
    .await?;

    for (category_id, accessory_id) in [(1, 5), (1, 6), (1, 8), (2, 7)] {
        compatibility::ActiveModel {
            category_id: Set(category_id),
            accessory_id: Set(accessory_id),
        }
        .insert(db)
        .await?;
    }

    for (category_id, accessory_id) in [(1, 5), (2, 8)] {
        default_assignment::ActiveModel {
            category_id: Set(category_id),
            accessory_id: Set(accessory_id),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

pub fn http_config() -> HttpConfig {
    HttpConfig {
        allowed_origins: AllowedOrigins::Any,
        request_timeout: Duration::from_secs(30),
    }
}

pub async fn setup_catalog_app() -> Router {
    let db = setup_catalog_db()
        .await
        .expect("Failed to set up catalog database");
    build_app(db, &http_config())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub fn ids(value: &serde_json::Value) -> Vec<i64> {
    value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item["id"].as_i64().expect("item without id"))
        .collect()
}
