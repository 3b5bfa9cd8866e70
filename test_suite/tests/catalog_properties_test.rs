// Cross-endpoint properties: list/detail consistency and category scoping
// of vehicle accessories.

use axum::http::StatusCode;

mod common;
use common::{get, ids, setup_catalog_app};

#[tokio::test]
async fn test_every_listed_id_resolves_to_the_same_row() {
    let app = setup_catalog_app().await;

    for (list, detail) in [
        ("/categories", "/categories"),
        ("/accessoires", "/accessoires"),
        ("/moyens", "/moyens"),
    ] {
        let (status, items) = get(&app, list).await;
        assert_eq!(status, StatusCode::OK);
        for item in items.as_array().unwrap() {
            let id = item["id"].as_i64().unwrap();
            let (status, row) = get(&app, &format!("{detail}/{id}")).await;
            assert_eq!(status, StatusCode::OK, "{detail}/{id}");
            assert_eq!(&row, item, "{detail}/{id} differs from its list entry");
        }
    }
}

#[tokio::test]
async fn test_vehicle_accessories_follow_the_vehicle_category() {
    let app = setup_catalog_app().await;
    let (_, vehicles) = get(&app, "/moyens").await;

    for vehicle in vehicles.as_array().unwrap() {
        let id = vehicle["id"].as_i64().unwrap();
        let category_id = vehicle["categorie_id"].as_i64().unwrap();

        for suffix in ["accessoires", "accessoires_defauts"] {
            let (status, for_vehicle) = get(&app, &format!("/moyens/{id}/{suffix}")).await;
            assert_eq!(status, StatusCode::OK);
            let (_, for_category) =
                get(&app, &format!("/categories/{category_id}/{suffix}")).await;
            assert_eq!(
                ids(&for_vehicle),
                ids(&for_category),
                "vehicle {id} {suffix} must match category {category_id}"
            );
        }
    }
}

#[tokio::test]
async fn test_vehicle_accessories_never_leak_other_categories() {
    let app = setup_catalog_app().await;
    // Vehicle 10 is in category 2; accessories 5, 6 and 8 are only
    // compatible with category 1.
    let (_, body) = get(&app, "/moyens/10/accessoires").await;
    let found = ids(&body);
    for foreign in [5, 6, 8] {
        assert!(!found.contains(&foreign), "accessory {foreign} leaked");
    }
}

#[tokio::test]
async fn test_vehicle_accessories_carry_four_fields_category_ones_two() {
    let app = setup_catalog_app().await;

    let (_, by_vehicle) = get(&app, "/moyens/11/accessoires").await;
    for item in by_vehicle.as_array().unwrap() {
        let object = item.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert!(object.contains_key("image") && object.contains_key("prix"));
    }

    let (_, by_category) = get(&app, "/categories/1/accessoires").await;
    for item in by_category.as_array().unwrap() {
        assert_eq!(item.as_object().unwrap().len(), 2);
    }
}

#[tokio::test]
async fn test_concurrent_requests_share_the_pool() {
    let app = setup_catalog_app().await;

    let requests = (0..16).map(|n| {
        let app = app.clone();
        async move {
            let uri = match n % 4 {
                0 => "/categories",
                1 => "/accessoires",
                2 => "/moyens",
                _ => "/moyens/11/accessoires",
            };
            get(&app, uri).await.0
        }
    });

    let mut handles = Vec::new();
    for request in requests {
        handles.push(tokio::spawn(request));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }
}
