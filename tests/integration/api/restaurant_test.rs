//! Restaurant API integration tests

use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{assert_error, assert_error_status, create_unique_test_user, TestApp};

#[tokio::test]
async fn test_empty_list() {
    let app = TestApp::new().await;

    let response = app.get("/restaurants", None).await;
    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_create_and_fetch() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await;

    let created = app
        .create_restaurant(&user.cookie(), "t@example.com", "1 Via Roma")
        .await;
    assert_eq!(created.status.as_u16(), 200, "body: {}", created.body);
    assert_eq!(created.body["name"], "Trattoria");
    assert_eq!(created.body["address"]["street"], "1 Via Roma");
    assert_eq!(created.body["address"]["region"], "Lazio");
    assert!(created.body["address"]["postal_code"].is_null());
    assert!(created.body["owner_id"].is_null());

    let id = created.body["id"].as_str().unwrap();
    let fetched = app.get(&format!("/restaurants/{}", id), None).await;
    assert_eq!(fetched.status.as_u16(), 200);
    assert_eq!(fetched.body, created.body);

    let list = app.get("/restaurants", None).await;
    assert_eq!(list.body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_create_requires_session() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/restaurants",
            json!({
                "name": "Trattoria",
                "email": "t@example.com",
                "address": { "street": "1 Via Roma", "city": "Rome" }
            }),
            None,
        )
        .await;
    assert_error(&response, 401, "Authentication token missing");
}

#[tokio::test]
async fn test_create_duplicates() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await;
    app.create_restaurant(&user.cookie(), "t@example.com", "1 Via Roma")
        .await;

    let same_street = app
        .create_restaurant(&user.cookie(), "other@example.com", "1 Via Roma")
        .await;
    assert_error(
        &same_street,
        409,
        "Restaurant with address 1 Via Roma already exists",
    );

    let same_email = app
        .create_restaurant(&user.cookie(), "t@example.com", "2 Via Roma")
        .await;
    assert_error(
        &same_email,
        409,
        "Restaurant with email t@example.com already exists",
    );
}

#[tokio::test]
async fn test_create_validation() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await;

    let response = app
        .post(
            "/restaurants",
            json!({
                "name": "Trattoria",
                "email": "not-an-email",
                "address": { "street": "1 Via Roma", "city": "Rome" }
            }),
            Some(&user.cookie()),
        )
        .await;
    assert_error_status(&response, 400);

    let no_address = app
        .post(
            "/restaurants",
            json!({ "name": "Trattoria", "email": "t@example.com" }),
            Some(&user.cookie()),
        )
        .await;
    assert_error_status(&no_address, 400);
}

#[tokio::test]
async fn test_get_unknown_and_malformed_ids() {
    let app = TestApp::new().await;

    let id = uuid::Uuid::new_v4();
    let missing = app.get(&format!("/restaurants/{}", id), None).await;
    assert_error(&missing, 404, &format!("Restaurant with id {} not found", id));

    let malformed = app.get("/restaurants/not-a-uuid", None).await;
    assert_error_status(&malformed, 400);
}

#[tokio::test]
async fn test_partial_update() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await;
    let created = app
        .create_restaurant(&user.cookie(), "t@example.com", "1 Via Roma")
        .await;
    let id = created.body["id"].as_str().unwrap();

    let updated = app
        .patch(
            &format!("/restaurants/{}", id),
            json!({ "phone": "555-0199", "address": { "postal_code": "00100" } }),
            Some(&user.cookie()),
        )
        .await;
    assert_eq!(updated.status.as_u16(), 200, "body: {}", updated.body);
    assert_eq!(updated.body["phone"], "555-0199");
    assert_eq!(updated.body["name"], "Trattoria");
    assert_eq!(updated.body["address"]["postal_code"], "00100");
    assert_eq!(updated.body["address"]["street"], "1 Via Roma");

    let missing = app
        .patch(
            &format!("/restaurants/{}", uuid::Uuid::new_v4()),
            json!({ "name": "Ghost" }),
            Some(&user.cookie()),
        )
        .await;
    assert_error_status(&missing, 404);
}

#[tokio::test]
async fn test_update_conflicts_with_other_restaurant() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await;
    let first = app
        .create_restaurant(&user.cookie(), "a@example.com", "1 Via Roma")
        .await;
    app.create_restaurant(&user.cookie(), "b@example.com", "2 Via Roma")
        .await;
    let id = first.body["id"].as_str().unwrap();

    let response = app
        .patch(
            &format!("/restaurants/{}", id),
            json!({ "address": { "street": "2 Via Roma" } }),
            Some(&user.cookie()),
        )
        .await;
    assert_error(
        &response,
        409,
        "Restaurant with address 2 Via Roma already exists",
    );
}

#[tokio::test]
async fn test_owned_restaurant_is_protected() {
    let app = TestApp::new().await;
    let (registered, owner_cookie) = app.register("owner@example.com", "secret123").await;
    let owner_id = registered.body["id"].as_str().unwrap().to_string();
    let stranger = create_unique_test_user(app.pool()).await;

    let created = app
        .create_restaurant(&owner_cookie, "t@example.com", "1 Via Roma")
        .await;
    let id = created.body["id"].as_str().unwrap().to_string();

    let upgrade = app
        .patch(
            &format!("/auth/roleRequest/{}", owner_id),
            json!({ "userRole": 1, "restaurantId": id }),
            Some(&owner_cookie),
        )
        .await;
    assert_eq!(upgrade.status.as_u16(), 200, "body: {}", upgrade.body);

    let update = app
        .patch(
            &format!("/restaurants/{}", id),
            json!({ "name": "Hijacked" }),
            Some(&stranger.cookie()),
        )
        .await;
    assert_error_status(&update, 403);

    let delete = app
        .delete(&format!("/restaurants/{}", id), Some(&stranger.cookie()))
        .await;
    assert_error_status(&delete, 403);

    let claim = app
        .patch(
            &format!("/auth/roleRequest/{}", stranger.id),
            json!({ "userRole": 1, "restaurantId": id }),
            Some(&stranger.cookie()),
        )
        .await;
    assert_error_status(&claim, 403);
}

#[tokio::test]
async fn test_delete_returns_restaurant_and_unlinks_owner() {
    let app = TestApp::new().await;
    let (registered, cookie) = app.register("owner@example.com", "secret123").await;
    let owner_id = registered.body["id"].as_str().unwrap().to_string();

    let created = app
        .create_restaurant(&cookie, "t@example.com", "1 Via Roma")
        .await;
    let id = created.body["id"].as_str().unwrap().to_string();
    app.patch(
        &format!("/auth/roleRequest/{}", owner_id),
        json!({ "userRole": 1, "restaurantId": id }),
        Some(&cookie),
    )
    .await;

    let deleted = app
        .delete(&format!("/restaurants/{}", id), Some(&cookie))
        .await;
    assert_eq!(deleted.status.as_u16(), 200, "body: {}", deleted.body);
    assert_eq!(deleted.body["id"], id);

    let gone = app.get(&format!("/restaurants/{}", id), None).await;
    assert_error_status(&gone, 404);

    let me = app.get("/auth/me", Some(&cookie)).await;
    assert!(me.body["restaurant_id"].is_null());
    assert_eq!(me.body["role"], "regular");

    // the street is free again
    let recreated = app
        .create_restaurant(&cookie, "t@example.com", "1 Via Roma")
        .await;
    assert_eq!(recreated.status.as_u16(), 200);
}

#[tokio::test]
async fn test_owner_moving_to_another_restaurant_releases_the_first() {
    let app = TestApp::new().await;
    let (registered, cookie) = app.register("owner@example.com", "secret123").await;
    let owner_id = registered.body["id"].as_str().unwrap().to_string();

    let first = app
        .create_restaurant(&cookie, "a@example.com", "1 Via Roma")
        .await;
    let first_id = first.body["id"].as_str().unwrap().to_string();
    let second = app
        .create_restaurant(&cookie, "b@example.com", "2 Via Roma")
        .await;
    let second_id = second.body["id"].as_str().unwrap().to_string();

    for restaurant_id in [&first_id, &second_id] {
        let upgrade = app
            .patch(
                &format!("/auth/roleRequest/{}", owner_id),
                json!({ "userRole": 1, "restaurantId": restaurant_id }),
                Some(&cookie),
            )
            .await;
        assert_eq!(upgrade.status.as_u16(), 200, "body: {}", upgrade.body);
    }

    let me = app.get("/auth/me", Some(&cookie)).await;
    assert_eq!(me.body["restaurant_id"], second_id);

    let released = app.get(&format!("/restaurants/{}", first_id), None).await;
    assert!(released.body["owner_id"].is_null());

    let owned = app.get(&format!("/restaurants/{}", second_id), None).await;
    assert_eq!(owned.body["owner_id"], owner_id);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new().await;

    let response = app.get("/menus", None).await;
    assert_error(&response, 404, "Not Found");
}
