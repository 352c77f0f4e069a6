use axum::http::StatusCode;
use roomdesk_server::tests::{create_test_building, create_test_room};
use serde_json::json;

mod common;
use common::mock_app::MockApp;

#[tokio::test]
async fn test_create_building() {
    let app = MockApp::new().await;

    let (status, body) = app.post("/api/buildings", json!({ "name": "  HQ  " })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], json!("HQ"));
    assert!(body["id"].as_i64().unwrap() > 0);

    let (status, body) = app.post("/api/buildings", json!({ "name": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!(400));
}

#[tokio::test]
async fn test_get_buildings_with_search() {
    let app = MockApp::new().await;
    create_test_building(app.storage.clone(), "Headquarters").await;
    create_test_building(app.storage.clone(), "Warehouse").await;

    let (status, body) = app.get("/api/buildings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = app.get("/api/buildings?search=WARE").await;
    let names: Vec<_> = body.as_array().unwrap().iter().map(|b| b["name"].clone()).collect();
    assert_eq!(names, vec![json!("Warehouse")]);
}

#[tokio::test]
async fn test_get_and_update_building() {
    let app = MockApp::new().await;
    let building = create_test_building(app.storage.clone(), "HQ").await;

    let (status, body) = app.get(&format!("/api/buildings/{}", building.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], json!("HQ"));

    let (status, body) = app
        .put(&format!("/api/buildings/{}", building.id), json!({ "name": "Main Office" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(building.id));
    assert_eq!(body["name"], json!("Main Office"));

    let (status, _) = app.put("/api/buildings/999", json!({ "name": "Ghost" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.get("/api/buildings/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], json!(404));
}

#[tokio::test]
async fn test_delete_building() {
    let app = MockApp::new().await;
    let empty = create_test_building(app.storage.clone(), "Empty").await;
    let busy = create_test_building(app.storage.clone(), "Busy").await;
    create_test_room(app.storage.clone(), busy.id, "Lab").await;

    let (status, _) = app.delete(&format!("/api/buildings/{}", empty.id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Deleting twice is silent
    let (status, _) = app.delete(&format!("/api/buildings/{}", empty.id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.delete(&format!("/api/buildings/{}", busy.id)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], json!(409));

    let (status, _) = app.get(&format!("/api/buildings/{}", busy.id)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_get_building_rooms() {
    let app = MockApp::new().await;
    let hq = create_test_building(app.storage.clone(), "HQ").await;
    let annex = create_test_building(app.storage.clone(), "Annex").await;
    create_test_room(app.storage.clone(), hq.id, "Lab").await;
    create_test_room(app.storage.clone(), hq.id, "Office").await;
    create_test_room(app.storage.clone(), annex.id, "Storage").await;

    let (status, body) = app.get(&format!("/api/buildings/{}/rooms", hq.id)).await;
    assert_eq!(status, StatusCode::OK);
    let rooms = body.as_array().unwrap();
    assert_eq!(rooms.len(), 2);
    assert!(rooms.iter().all(|room| room["building_id"] == json!(hq.id)));

    let (status, _) = app.get("/api/buildings/999/rooms").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
