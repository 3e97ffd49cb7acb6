#[macro_use]
mod common;

use std::sync::Arc;
use actix_web::cookie::Key;
use actix_web::http::StatusCode;
use actix_web::test;
use common::{body_text, listing_form, listing_ids, location, Browser, CountingListings};
use wanderlust::config::SessionConfig;
use wanderlust::core::AppState;
use wanderlust::repositories::{InMemoryReviewRepository, InMemoryUserRepository};
use wanderlust::routes::build_app;

const MISSING_ID: &str = "64b7f0c2a1b2c3d4e5f60718";

#[actix_web::test]
async fn test_created_listing_appears_once_on_index() {
    let app = test::init_service(build_app(AppState::in_memory(4))).await;
    let mut browser = Browser::new();
    signup!(app, browser, "host");

    let res = send!(app, browser, browser.post_form("/listings", &listing_form("Sunny Loft", "1200")));
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/listings");

    let res = send!(app, browser, browser.get("/listings"));
    assert_eq!(res.status(), StatusCode::OK);
    let html = body_text(res).await;

    assert_eq!(html.matches("Sunny Loft").count(), 1);
    assert!(html.contains("New Listing Created!"));
    assert_eq!(listing_ids(&html).len(), 1);
}

#[actix_web::test]
async fn test_flash_is_shown_only_once() {
    let app = test::init_service(build_app(AppState::in_memory(4))).await;
    let mut browser = Browser::new();
    signup!(app, browser, "host");
    create_listing!(app, browser, "Harbor View");

    let res = send!(app, browser, browser.get("/listings"));
    let html = body_text(res).await;

    assert!(!html.contains("New Listing Created!"));
    assert!(html.contains("Harbor View"));
}

#[actix_web::test]
async fn test_show_renders_listing_details() {
    let app = test::init_service(build_app(AppState::in_memory(4))).await;
    let mut browser = Browser::new();
    signup!(app, browser, "host");
    let id = create_listing!(app, browser, "Cliff House");

    let res = send!(app, browser, browser.get(&format!("/listings/{}", id)));
    assert_eq!(res.status(), StatusCode::OK);
    let html = body_text(res).await;

    assert!(html.contains("Cliff House"));
    assert!(html.contains("Owned by <i>host</i>"));
    assert!(html.contains("Lisbon, Portugal"));
    assert!(html.contains(&format!("/listings/{}/edit", id)));
}

#[actix_web::test]
async fn test_show_with_malformed_id_is_bad_request() {
    let app = test::init_service(build_app(AppState::in_memory(4))).await;
    let mut browser = Browser::new();

    for raw in ["not-an-id", "123", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
        let res = send!(app, browser, browser.get(&format!("/listings/{}", raw)));
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "id {raw}");
        assert!(body_text(res).await.contains("Invalid ID format"));
    }
}

#[actix_web::test]
async fn test_malformed_id_never_reaches_the_repository() {
    let listings = Arc::new(CountingListings::default());
    let state = AppState::new(
        listings.clone(),
        Arc::new(InMemoryReviewRepository::new()),
        Arc::new(InMemoryUserRepository::new()),
        SessionConfig::default(),
        Key::generate(),
        4,
    );
    let app = test::init_service(build_app(state)).await;
    let mut browser = Browser::new();
    signup!(app, browser, "host");

    for raw in ["not-an-id", "123", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
        let res = send!(app, browser, browser.get(&format!("/listings/{}", raw)));
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "show {raw}");

        let res = send!(app, browser, browser.get(&format!("/listings/{}/edit", raw)));
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "edit {raw}");

        let res = send!(app, browser, browser.post_form(&format!("/listings/{}?_method=DELETE", raw), &[]));
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "delete {raw}");
    }
    assert_eq!(listings.lookups(), 0);

    send!(app, browser, browser.get(&format!("/listings/{}", MISSING_ID)));
    assert_eq!(listings.lookups(), 1);
}

#[actix_web::test]
async fn test_show_missing_listing_redirects_with_flash() {
    let app = test::init_service(build_app(AppState::in_memory(4))).await;
    let mut browser = Browser::new();

    let res = send!(app, browser, browser.get(&format!("/listings/{}", MISSING_ID)));
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/listings");

    let res = send!(app, browser, browser.get("/listings"));
    assert!(body_text(res).await.contains("Listing you requested for does not exist!"));
}

#[actix_web::test]
async fn test_missing_listing_is_not_found_for_edit_update_delete() {
    let app = test::init_service(build_app(AppState::in_memory(4))).await;
    let mut browser = Browser::new();
    signup!(app, browser, "host");

    let res = send!(app, browser, browser.get(&format!("/listings/{}/edit", MISSING_ID)));
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = send!(
        app,
        browser,
        browser.post_form(&format!("/listings/{}?_method=PUT", MISSING_ID), &listing_form("Ghost", "10"))
    );
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = send!(app, browser, browser.post_form(&format!("/listings/{}?_method=DELETE", MISSING_ID), &[]));
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_malformed_id_is_bad_request_on_protected_routes() {
    let app = test::init_service(build_app(AppState::in_memory(4))).await;
    let mut browser = Browser::new();
    signup!(app, browser, "host");

    let res = send!(app, browser, browser.get("/listings/nope/edit"));
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = send!(app, browser, browser.post_form("/listings/nope?_method=DELETE", &[]));
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_anonymous_user_is_redirected_to_login() {
    let app = test::init_service(build_app(AppState::in_memory(4))).await;
    let mut browser = Browser::new();

    let res = send!(app, browser, browser.get("/listings/new"));
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/login");

    let res = send!(app, browser, browser.get(&format!("/listings/{}/edit", MISSING_ID)));
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/login");

    let res = send!(app, browser, browser.get("/login"));
    assert!(body_text(res).await.contains("You must be logged in to do that!"));
}

#[actix_web::test]
async fn test_login_check_runs_before_form_validation() {
    let app = test::init_service(build_app(AppState::in_memory(4))).await;
    let mut browser = Browser::new();

    let res = send!(app, browser, browser.post_form("/listings", &listing_form("", "-5")));

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/login");
}

#[actix_web::test]
async fn test_invalid_listing_payload_is_bad_request() {
    let app = test::init_service(build_app(AppState::in_memory(4))).await;
    let mut browser = Browser::new();
    signup!(app, browser, "host");

    let mut form = listing_form("Broken", "-5");
    form[5] = ("listing[country]", "  ");
    let res = send!(app, browser, browser.post_form("/listings", &form));

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let html = body_text(res).await;
    assert!(html.contains("country is required, price must be greater than or equal to 0"));

    let res = send!(app, browser, browser.get("/listings"));
    assert!(listing_ids(&body_text(res).await).is_empty());
}

#[actix_web::test]
async fn test_owner_updates_listing() {
    let app = test::init_service(build_app(AppState::in_memory(4))).await;
    let mut browser = Browser::new();
    signup!(app, browser, "host");
    let id = create_listing!(app, browser, "Old Title");

    let res = send!(app, browser, browser.get(&format!("/listings/{}/edit", id)));
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains(r#"value="Old Title""#));

    let res = send!(
        app,
        browser,
        browser.post_form(&format!("/listings/{}?_method=PUT", id), &listing_form("New Title", "80"))
    );
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), format!("/listings/{}", id));

    let res = send!(app, browser, browser.get(&format!("/listings/{}", id)));
    let html = body_text(res).await;
    assert!(html.contains("Listing Updated!"));
    assert!(html.contains("New Title"));
    assert!(!html.contains("Old Title"));
}

#[actix_web::test]
async fn test_owner_deletes_listing() {
    let app = test::init_service(build_app(AppState::in_memory(4))).await;
    let mut browser = Browser::new();
    signup!(app, browser, "host");
    let id = create_listing!(app, browser, "Short Stay");

    let res = send!(app, browser, browser.post_form(&format!("/listings/{}?_method=DELETE", id), &[]));
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/listings");

    let res = send!(app, browser, browser.get("/listings"));
    let html = body_text(res).await;
    assert!(html.contains("Listing Deleted!"));
    assert!(!html.contains("Short Stay"));
}

#[actix_web::test]
async fn test_non_owner_cannot_modify_listing() {
    let app = test::init_service(build_app(AppState::in_memory(4))).await;
    let mut host = Browser::new();
    signup!(app, host, "host");
    let id = create_listing!(app, host, "Guarded Villa");

    let mut guest = Browser::new();
    signup!(app, guest, "guest");
    let listing_path = format!("/listings/{}", id);

    let res = send!(app, guest, guest.get(&format!("/listings/{}/edit", id)));
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), listing_path);

    let res = send!(
        app,
        guest,
        guest.post_form(&format!("/listings/{}?_method=PUT", id), &listing_form("Taken Over", "1"))
    );
    assert_eq!(location(&res), listing_path);

    let res = send!(app, guest, guest.post_form(&format!("/listings/{}?_method=DELETE", id), &[]));
    assert_eq!(location(&res), listing_path);

    let res = send!(app, guest, guest.get(&listing_path));
    let html = body_text(res).await;
    assert!(html.contains("You are not the owner of this listing"));
    assert!(html.contains("Guarded Villa"));
    assert!(!html.contains("/edit"));
}

#[actix_web::test]
async fn test_post_without_override_is_not_routed_to_put() {
    let app = test::init_service(build_app(AppState::in_memory(4))).await;
    let mut browser = Browser::new();
    signup!(app, browser, "host");
    let id = create_listing!(app, browser, "Stable Title");

    let res = send!(
        app,
        browser,
        browser.post_form(&format!("/listings/{}?_method=GET", id), &listing_form("Changed", "1"))
    );
    assert_ne!(res.status(), StatusCode::FOUND);

    let res = send!(app, browser, browser.get(&format!("/listings/{}", id)));
    assert!(body_text(res).await.contains("Stable Title"));
}

#[actix_web::test]
async fn test_root_health_and_unknown_routes() {
    let app = test::init_service(build_app(AppState::in_memory(4))).await;
    let mut browser = Browser::new();

    let res = send!(app, browser, browser.get("/"));
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/listings");

    let res = send!(app, browser, browser.get("/health"));
    assert_eq!(res.status(), StatusCode::OK);
    let health: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["service"], "wanderlust");

    let res = send!(app, browser, browser.get("/nowhere/to/be/found"));
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(body_text(res).await.contains("Page Not Found"));
}
