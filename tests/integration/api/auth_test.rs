//! Authentication API integration tests
//!
//! Tests for register, login, logout, the current-user endpoint and role
//! upgrades, all through the HTTP router.

use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{
    assert_error, assert_error_status, create_test_user, token_from_set_cookie, TestApp,
    TEST_SECRET,
};
use restaurant_orders::backend::auth::sessions::{TokenService, TOKEN_EXPIRES_IN_SECS};

#[tokio::test]
async fn test_register_then_login_same_credentials() {
    let app = TestApp::new().await;

    let (registered, _) = app.register("a@b.com", "secret123").await;
    assert_eq!(registered.status.as_u16(), 200);
    assert_eq!(registered.body["email"], "a@b.com");
    assert_eq!(registered.body["role"], "regular");
    assert!(registered.body.get("password_hash").is_none());
    assert!(registered.body.get("password").is_none());

    let login = app
        .post(
            "/auth/login",
            json!({ "email": "a@b.com", "password": "secret123" }),
            None,
        )
        .await;
    assert_eq!(login.status.as_u16(), 200);
    assert_eq!(login.body["id"], registered.body["id"]);

    let set_cookie = login.set_cookie().expect("login sets the session cookie");
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains(&format!("Max-Age={}", TOKEN_EXPIRES_IN_SECS)));
    assert!(set_cookie.contains("Path=/"));

    let token = token_from_set_cookie(set_cookie).unwrap();
    let user_id = TokenService::new(TEST_SECRET).verify(token).unwrap();
    assert_eq!(registered.body["id"], user_id.to_string());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    app.register("a@b.com", "secret123").await;

    let response = app
        .post(
            "/auth/register",
            json!({ "email": "a@b.com", "password": "another-password" }),
            None,
        )
        .await;
    assert_error(&response, 409, "User with email a@b.com already exists");
    assert!(response.set_cookie().is_none());
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::new().await;

    let bad_email = app
        .post(
            "/auth/register",
            json!({ "email": "not-an-email", "password": "secret123" }),
            None,
        )
        .await;
    assert_error_status(&bad_email, 400);

    let short_password = app
        .post(
            "/auth/register",
            json!({ "email": "a@b.com", "password": "short" }),
            None,
        )
        .await;
    assert_error_status(&short_password, 400);

    let missing_field = app
        .post("/auth/register", json!({ "email": "a@b.com" }), None)
        .await;
    assert_error_status(&missing_field, 400);
}

#[tokio::test]
async fn test_unknown_email_and_wrong_password_are_identical() {
    let app = TestApp::new().await;
    create_test_user(app.pool(), "a@b.com", "secret123").await;

    let unknown = app
        .post(
            "/auth/login",
            json!({ "email": "nobody@b.com", "password": "secret123" }),
            None,
        )
        .await;
    let wrong = app
        .post(
            "/auth/login",
            json!({ "email": "a@b.com", "password": "wrong-password" }),
            None,
        )
        .await;

    assert_error(&unknown, 401, "Wrong credentials provided");
    assert_error(&wrong, 401, "Wrong credentials provided");
    assert_eq!(unknown.body, wrong.body);
    assert!(unknown.set_cookie().is_none());
}

#[tokio::test]
async fn test_logout_always_clears_cookie() {
    let app = TestApp::new().await;
    let user = create_test_user(app.pool(), "a@b.com", "secret123").await;

    let anonymous = app.send(axum::http::Method::POST, "/auth/logout", None, None).await;
    let logged_in = app
        .send(axum::http::Method::POST, "/auth/logout", None, Some(&user.cookie()))
        .await;

    for response in [&anonymous, &logged_in] {
        assert_eq!(response.status.as_u16(), 200);
        assert_eq!(
            response.set_cookie(),
            Some("Authorization=; HttpOnly; Max-Age=0; Path=/")
        );
    }
}

#[tokio::test]
async fn test_me_requires_session() {
    let app = TestApp::new().await;
    let user = create_test_user(app.pool(), "a@b.com", "secret123").await;

    let missing = app.get("/auth/me", None).await;
    assert_error(&missing, 401, "Authentication token missing");

    let empty = app.get("/auth/me", Some("Authorization=")).await;
    assert_error(&empty, 401, "Authentication token missing");

    let forged = TokenService::new("some-other-secret").issue(user.id).unwrap();
    let wrong = app
        .get("/auth/me", Some(&format!("Authorization={}", forged.token)))
        .await;
    assert_error(&wrong, 401, "Wrong authentication token");

    let me = app.get("/auth/me", Some(&user.cookie())).await;
    assert_eq!(me.status.as_u16(), 200);
    assert_eq!(me.body["email"], "a@b.com");
}

#[tokio::test]
async fn test_role_upgrade_to_owner() {
    let app = TestApp::new().await;
    let (registered, cookie) = app.register("a@b.com", "secret123").await;
    let user_id = registered.body["id"].as_str().unwrap().to_string();

    let restaurant = app.create_restaurant(&cookie, "t@example.com", "1 Via Roma").await;
    let restaurant_id = restaurant.body["id"].as_str().unwrap().to_string();

    let response = app
        .patch(
            &format!("/auth/roleRequest/{}", user_id),
            json!({ "userRole": 1, "restaurantId": restaurant_id }),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status.as_u16(), 200, "body: {}", response.body);
    assert_eq!(response.body["user"]["role"], "owner");
    assert_eq!(response.body["user"]["restaurant_id"], restaurant_id);
    assert_eq!(response.body["restaurant"]["id"], restaurant_id);
    assert_eq!(response.body["restaurant"]["owner_id"], user_id);

    let stored = app
        .get(&format!("/restaurants/{}", restaurant_id), None)
        .await;
    assert_eq!(stored.body["owner_id"], user_id);
}

#[tokio::test]
async fn test_role_upgrade_other_code_returns_only_user() {
    let app = TestApp::new().await;
    let (registered, cookie) = app.register("a@b.com", "secret123").await;
    let user_id = registered.body["id"].as_str().unwrap();

    let response = app
        .patch(
            &format!("/auth/roleRequest/{}", user_id),
            json!({ "userRole": "0" }),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status.as_u16(), 200, "body: {}", response.body);
    assert_eq!(response.body["user"]["role"], "regular");
    assert!(response.body.get("restaurant").is_none());
}

#[tokio::test]
async fn test_role_upgrade_errors() {
    let app = TestApp::new().await;
    let (registered, cookie) = app.register("a@b.com", "secret123").await;
    let user_id = registered.body["id"].as_str().unwrap().to_string();
    let other = create_test_user(app.pool(), "c@d.com", "secret123").await;

    let unauthenticated = app
        .patch(
            &format!("/auth/roleRequest/{}", user_id),
            json!({ "userRole": 0 }),
            None,
        )
        .await;
    assert_error(&unauthenticated, 401, "Authentication token missing");

    let someone_else = app
        .patch(
            &format!("/auth/roleRequest/{}", other.id),
            json!({ "userRole": 0 }),
            Some(&cookie),
        )
        .await;
    assert_error_status(&someone_else, 403);

    let unknown_code = app
        .patch(
            &format!("/auth/roleRequest/{}", user_id),
            json!({ "userRole": 5 }),
            Some(&cookie),
        )
        .await;
    assert_error_status(&unknown_code, 400);

    let missing_restaurant_id = app
        .patch(
            &format!("/auth/roleRequest/{}", user_id),
            json!({ "userRole": 1 }),
            Some(&cookie),
        )
        .await;
    assert_error_status(&missing_restaurant_id, 400);

    let missing_restaurant = uuid::Uuid::new_v4();
    let not_found = app
        .patch(
            &format!("/auth/roleRequest/{}", user_id),
            json!({ "userRole": 1, "restaurantId": missing_restaurant }),
            Some(&cookie),
        )
        .await;
    assert_error(
        &not_found,
        404,
        &format!("Restaurant with id {} not found", missing_restaurant),
    );

    let me = app.get("/auth/me", Some(&cookie)).await;
    assert_eq!(me.body["role"], "regular");
    assert!(me.body["restaurant_id"].is_null());
}
