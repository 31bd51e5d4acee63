mod common;

use account_service::domain::user::models::Role;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

fn signup_body(email: &str) -> serde_json::Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": email,
        "password": "pass_word!",
        "passwordConfirm": "pass_word!"
    })
}

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&signup_body("ada@example.com"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");
    assert!(body["token"].is_string());
    assert_eq!(body["data"]["user"]["firstName"], "Ada");
    assert_eq!(body["data"]["user"]["email"], "ada@example.com");
    assert_eq!(body["data"]["user"]["role"], "customer");
    assert!(body["data"]["user"]["id"].is_string());
}

#[tokio::test]
async fn test_signup_never_returns_digest() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&signup_body("ada@example.com"))
        .send()
        .await
        .unwrap();

    let text = response.text().await.unwrap();
    assert!(!text.contains("password"));
    assert!(!text.contains("argon2"));
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = TestApp::spawn().await;

    app.post("/api/auth/signup")
        .json(&signup_body("ada@example.com"))
        .send()
        .await
        .unwrap();

    let response = app
        .post("/api/auth/signup")
        .json(&signup_body("ada@example.com"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Email already in use"));
}

#[tokio::test]
async fn test_signup_weak_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "weak",
            "passwordConfirm": "weak"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("Password must be"));
}

#[tokio::test]
async fn test_signup_password_mismatch() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "pass_word!",
            "passwordConfirm": "different!"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Passwords do not match"));
}

#[tokio::test]
async fn test_signup_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "not-an-email",
            "password": "pass_word!",
            "passwordConfirm": "pass_word!"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;
    app.seed_user("ada@example.com", "pass_word!", Role::Customer);

    let response = app
        .post("/api/auth/login")
        .json(&json!({"email": "ada@example.com", "password": "pass_word!"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(set_cookie.starts_with("token="));

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert!(body["token"].is_string());
    assert_eq!(body["data"]["user"]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_login_no_user_existence_oracle() {
    let app = TestApp::spawn().await;
    app.seed_user("ada@example.com", "pass_word!", Role::Customer);

    // Known email, wrong password
    let wrong_password = app
        .post("/api/auth/login")
        .json(&json!({"email": "ada@example.com", "password": "wrong_password"}))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password: serde_json::Value = wrong_password.json().await.unwrap();

    // Unknown email entirely
    let unknown_email = app
        .post("/api/auth/login")
        .json(&json!({"email": "ghost@example.com", "password": "pass_word!"}))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let unknown_email: serde_json::Value = unknown_email.json().await.unwrap();

    // Identical rejection in both cases
    assert_eq!(wrong_password["message"], "Incorrect email or password");
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/auth/me").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert!(body["message"].as_str().unwrap().contains("Please log in"));
}

#[tokio::test]
async fn test_me_with_bearer_token() {
    let app = TestApp::spawn().await;
    let user = app.seed_user("ada@example.com", "pass_word!", Role::Customer);
    let token = app.token_for(&user);

    let response = app
        .get("/api/auth/me")
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["user"]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_me_with_cookie_only() {
    let app = TestApp::spawn().await;
    app.seed_user("ada@example.com", "pass_word!", Role::Customer);

    // Login stores the cookie in the client's jar
    app.post("/api/auth/login")
        .json(&json!({"email": "ada@example.com", "password": "pass_word!"}))
        .send()
        .await
        .unwrap();

    // No Authorization header: the cookie alone must authenticate
    let response = app.get("/api/auth/me").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["user"]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_me_with_token_of_deleted_user() {
    let app = TestApp::spawn().await;
    let user = app.seed_user("ada@example.com", "pass_word!", Role::Customer);
    let token = app.token_for(&user);

    app.store.remove(&user.id);

    let response = app
        .get("/api/auth/me")
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("user belonging to this token no longer exists"));
}

#[tokio::test]
async fn test_me_with_expired_token() {
    let app = TestApp::spawn().await;
    let user = app.seed_user("ada@example.com", "pass_word!", Role::Customer);
    let token = app.expired_token_for(&user);

    let response = app
        .get("/api/auth/me")
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("expired"));
}

#[tokio::test]
async fn test_me_with_tampered_token() {
    let app = TestApp::spawn().await;
    let user = app.seed_user("ada@example.com", "pass_word!", Role::Customer);
    let token = app.token_for(&user);

    // Flip the first character of the signature segment
    let dot = token.rfind('.').unwrap();
    let mut bytes = token.into_bytes();
    bytes[dot + 1] = if bytes[dot + 1] == b'A' { b'B' } else { b'A' };
    let token = String::from_utf8(bytes).unwrap();

    let response = app
        .get("/api/auth/me")
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie_but_token_survives() {
    let app = TestApp::spawn().await;
    let user = app.seed_user("ada@example.com", "pass_word!", Role::Customer);
    let token = app.token_for(&user);

    let response = app
        .post("/api/auth/logout")
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(set_cookie.contains("Max-Age=0"));

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Logged out successfully");

    // No server-side revocation: the same bearer token still authenticates
    let me = app
        .get("/api/auth/me")
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(me.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_logout_requires_token() {
    let app = TestApp::spawn().await;

    let response = app.post("/api/auth/logout").send().await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_forbidden_for_customer() {
    let app = TestApp::spawn().await;
    let customer = app.seed_user("ada@example.com", "pass_word!", Role::Customer);
    let token = app.token_for(&customer);

    let response = app
        .get("/api/users")
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert!(body["message"].as_str().unwrap().contains("permission"));
}

#[tokio::test]
async fn test_list_users_allowed_for_admin() {
    let app = TestApp::spawn().await;
    app.seed_user("ada@example.com", "pass_word!", Role::Customer);
    let admin = app.seed_user("root@example.com", "pass_word!", Role::Admin);
    let token = app.token_for(&admin);

    let response = app
        .get("/api/users")
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["users"].as_array().unwrap().len(), 2);
}
