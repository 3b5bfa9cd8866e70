// Happy-path coverage of every route over the seeded catalog.

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{get, ids, setup_catalog_app};

#[tokio::test]
async fn test_welcome_message() {
    let app = setup_catalog_app().await;
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Bienvenue sur l'API Moyens Logistiques !"})
    );
}

#[tokio::test]
async fn test_list_categories() {
    let app = setup_catalog_app().await;
    let (status, body) = get(&app, "/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "nom": "Vélos"},
            {"id": 2, "nom": "Trottinettes"},
            {"id": 3, "nom": "Chariots"}
        ])
    );
}

#[tokio::test]
async fn test_get_category() {
    let app = setup_catalog_app().await;
    let (status, body) = get(&app, "/categories/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 2, "nom": "Trottinettes"}));
}

#[tokio::test]
async fn test_category_default_accessories() {
    let app = setup_catalog_app().await;
    let (status, body) = get(&app, "/categories/1/accessoires_defauts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 5, "nom": "Casque"}]));
}

#[tokio::test]
async fn test_category_compatible_accessories_return_id_and_name_only() {
    let app = setup_catalog_app().await;
    let (status, body) = get(&app, "/categories/1/accessoires").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 5, "nom": "Casque"},
            {"id": 6, "nom": "Antivol"},
            {"id": 8, "nom": "Panier"}
        ])
    );
}

#[tokio::test]
async fn test_list_accessories() {
    let app = setup_catalog_app().await;
    let (status, body) = get(&app, "/accessoires").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![5, 6, 7, 8]);
    for item in body.as_array().unwrap() {
        let keys: Vec<&String> = item.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2, "unexpected fields in {item}");
    }
}

#[tokio::test]
async fn test_get_accessory() {
    let app = setup_catalog_app().await;
    let (status, body) = get(&app, "/accessoires/7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 7, "nom": "Sacoche"}));
}

#[tokio::test]
async fn test_list_vehicles_returns_every_field() {
    let app = setup_catalog_app().await;
    let (status, body) = get(&app, "/moyens").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![10, 11, 12]);
    assert_eq!(
        body[0],
        json!({
            "id": 10,
            "nom": "Trottinette électrique",
            "categorie_id": 2,
            "roues": 2,
            "emplacement": "Hall B",
            "type_base": "Électrique",
            "taille": "Unique",
            "departement": "92",
            "image": "trottinette.png",
            "prix": 399.9
        })
    );
}

#[tokio::test]
async fn test_get_vehicle_with_missing_optional_fields() {
    let app = setup_catalog_app().await;
    let (status, body) = get(&app, "/moyens/12").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 12);
    assert_eq!(body["categorie_id"], 1);
    assert!(body["roues"].is_null());
    assert!(body["prix"].is_null());
}

#[tokio::test]
async fn test_vehicle_compatible_accessories() {
    let app = setup_catalog_app().await;
    let (status, body) = get(&app, "/moyens/10/accessoires").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"id": 7, "nom": "Sacoche", "image": "x.png", "prix": 12.5}])
    );
}

#[tokio::test]
async fn test_vehicle_default_accessories() {
    let app = setup_catalog_app().await;
    let (status, body) = get(&app, "/moyens/10/accessoires_defauts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"id": 8, "nom": "Panier", "image": null, "prix": null}])
    );
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_catalog_app().await;
    let (status, body) = get(&app, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/moyens/{id}/accessoires"].is_object());
}
