mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use orgnest::types::token::{RLoginForm, RRefreshToken};

#[tokio::test]
async fn test_signup_flow_success() {
    println!("\n\n[+] Running test: test_signup_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    println!("[+] Actix web app initialized.");

    let user_data = test_data::sample_user();
    println!("[>] Sending signup request for: {}", user_data.email);

    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(&user_data)
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("User created"));

    let created_user = ctx.db.get_user_by_email(&user_data.email).await.unwrap();
    assert_eq!(created_user.email, user_data.email);
    assert_eq!(created_user.name, user_data.name);
    assert!(!created_user.password_hash.is_empty());
    // The password never lands in the store as plaintext.
    assert_ne!(created_user.password_hash, user_data.password);
    assert_eq!(created_user.refresh_token, None);
    println!("[/] Test passed: signup flow successful.");
}

#[tokio::test]
async fn test_signup_duplicate_email_rejected() {
    println!("\n\n[+] Running test: test_signup_duplicate_email_rejected");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let user_data = test_data::sample_user_with_email("alice@example.com");

    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(&user_data)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    println!("[>] Sending second signup with the same email.");
    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(&user_data)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "EMAIL_ALREADY_REGISTERED");
    println!("[/] Test passed: duplicate email rejected with 400.");
}

#[tokio::test]
async fn test_login_flow() {
    println!("\n\n[+] Running test: test_login_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let user_data = test_data::sample_user_with_email("bob@example.com");
    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(&user_data)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    println!("[>] Logging in with the wrong password.");
    let req = test::TestRequest::post()
        .uri("/token")
        .set_form(&RLoginForm {
            username: user_data.email.clone(),
            password: "wrong".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    println!("[>] Logging in with the correct password.");
    let req = test::TestRequest::post()
        .uri("/token")
        .set_form(&RLoginForm {
            username: user_data.email.clone(),
            password: user_data.password.clone(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(!body["access_token"].as_str().unwrap().is_empty());
    assert!(!body["refresh_token"].as_str().unwrap().is_empty());
    assert_eq!(body["token_type"], "bearer");

    // The issued refresh token is the one on the record.
    let user = ctx.db.get_user_by_email(&user_data.email).await.unwrap();
    assert_eq!(
        user.refresh_token.as_deref(),
        body["refresh_token"].as_str()
    );
    println!("[/] Test passed: login flow successful.");
}

#[tokio::test]
async fn test_me_requires_bearer_token() {
    println!("\n\n[+] Running test: test_me_requires_bearer_token");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    println!("[>] GET /users/me without an Authorization header.");
    let req = test::TestRequest::get().uri("/users/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    println!("[>] GET /users/me with a garbage bearer token.");
    let req = test::TestRequest::get()
        .uri("/users/me")
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    println!("[>] GET /users/me with a valid access token.");
    let (email, pair) = client.create_logged_in_user(None).await;
    let req = test::TestRequest::get()
        .uri("/users/me")
        .insert_header(("Authorization", format!("Bearer {}", pair.access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], email);
    assert_eq!(body["name"], "Test User");
    println!("[/] Test passed: bearer guard behaves.");
}

#[tokio::test]
async fn test_refresh_rotates_the_stored_token() {
    println!("\n\n[+] Running test: test_refresh_rotates_the_stored_token");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let (email, pair) = client.create_logged_in_user(None).await;
    let old_refresh = pair.refresh_token.clone();

    println!("[>] First refresh with the issued token.");
    let req = test::TestRequest::post()
        .uri("/refresh-token")
        .set_json(&RRefreshToken {
            refresh_token: old_refresh.clone(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let new_refresh = body["refresh_token"].as_str().unwrap().to_string();
    assert_ne!(new_refresh, old_refresh);
    assert_eq!(body["token_type"], "bearer");

    let user = ctx.db.get_user_by_email(&email).await.unwrap();
    assert_eq!(user.refresh_token.as_deref(), Some(new_refresh.as_str()));

    println!("[>] Replaying the superseded token.");
    let req = test::TestRequest::post()
        .uri("/refresh-token")
        .set_json(&RRefreshToken {
            refresh_token: old_refresh,
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_CREDENTIALS");

    println!("[>] The fresh token still works.");
    let req = test::TestRequest::post()
        .uri("/refresh-token")
        .set_json(&RRefreshToken {
            refresh_token: new_refresh,
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    println!("[/] Test passed: rotation supersedes the old token.");
}

#[tokio::test]
async fn test_refresh_with_garbage_token() {
    println!("\n\n[+] Running test: test_refresh_with_garbage_token");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/refresh-token")
        .set_json(&RRefreshToken {
            refresh_token: "definitely-not-a-jwt".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_CREDENTIALS");
    println!("[/] Test passed: malformed refresh token rejected.");
}

#[tokio::test]
async fn test_revoke_blocks_refresh_but_keeps_stored_value() {
    println!("\n\n[+] Running test: test_revoke_blocks_refresh_but_keeps_stored_value");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let (email, pair) = client.create_logged_in_user(None).await;

    println!("[>] Revoking the refresh token.");
    let req = test::TestRequest::post()
        .uri("/revoke-refresh-token")
        .insert_header(("Authorization", format!("Bearer {}", pair.access_token)))
        .set_json(&RRefreshToken {
            refresh_token: pair.refresh_token.clone(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("revoked"));

    // Revocation leaves the stored value alone; the equality gate on its own
    // would still pass.
    let user = ctx.db.get_user_by_email(&email).await.unwrap();
    assert_eq!(
        user.refresh_token.as_deref(),
        Some(pair.refresh_token.as_str())
    );

    println!("[>] Refreshing with the revoked token.");
    let req = test::TestRequest::post()
        .uri("/refresh-token")
        .set_json(&RRefreshToken {
            refresh_token: pair.refresh_token.clone(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_REVOKED");
    println!("[/] Test passed: revoked token is blocked by the revocation gate.");
}

#[tokio::test]
async fn test_revoke_is_idempotent() {
    println!("\n\n[+] Running test: test_revoke_is_idempotent");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let (_email, pair) = client.create_logged_in_user(None).await;

    for attempt in 1..=2 {
        println!("[>] Revoke attempt {attempt}.");
        let req = test::TestRequest::post()
            .uri("/revoke-refresh-token")
            .insert_header(("Authorization", format!("Bearer {}", pair.access_token)))
            .set_json(&RRefreshToken {
                refresh_token: pair.refresh_token.clone(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
    println!("[/] Test passed: double revoke succeeds both times.");
}

#[tokio::test]
async fn test_revoke_someone_elses_token_rejected() {
    println!("\n\n[+] Running test: test_revoke_someone_elses_token_rejected");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let (_alice, alice_pair) = client.create_logged_in_user(None).await;
    let (_mallory, mallory_pair) = client.create_logged_in_user(None).await;

    println!("[>] Mallory tries to revoke Alice's refresh token.");
    let req = test::TestRequest::post()
        .uri("/revoke-refresh-token")
        .insert_header((
            "Authorization",
            format!("Bearer {}", mallory_pair.access_token),
        ))
        .set_json(&RRefreshToken {
            refresh_token: alice_pair.refresh_token.clone(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Alice's token is untouched and still refreshes.
    let req = test::TestRequest::post()
        .uri("/refresh-token")
        .set_json(&RRefreshToken {
            refresh_token: alice_pair.refresh_token.clone(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    println!("[/] Test passed: ownership check holds.");
}
