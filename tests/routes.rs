use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};

use member_search::configure;
use member_search::pagination::PageLimits;

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($test_db.repository()))
                .app_data(web::Data::new(PageLimits {
                    default_size: 20,
                    max_size: 100,
                }))
                .configure(configure),
        )
        .await
    };
}

#[actix_web::test]
async fn v1_returns_all_matches_with_item_count() {
    let test_db = common::TestDb::new("v1_returns_all_matches.db");
    common::seed_reference_members(&test_db.repository());
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/api/v1/members?teamName=teamA&ageGoe=15")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "member2");
    assert_eq!(body["data"][0]["teamName"], "teamA");
    assert_eq!(body["data"][0]["age"], 20);
}

#[actix_web::test]
async fn v3_returns_page_with_derived_total() {
    let test_db = common::TestDb::new("v3_returns_page.db");
    common::seed_reference_members(&test_db.repository());
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/api/v3/members?offset=3&limit=2&sort=name,desc")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 2);
    assert_eq!(body["data"]["totalElements"], 4);
    assert_eq!(body["data"]["size"], 2);
    assert_eq!(body["data"]["number"], 1);
    assert_eq!(body["data"]["content"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"]["content"][0]["name"], "member1");
}

#[actix_web::test]
async fn v2_uses_zero_based_page_numbers() {
    let test_db = common::TestDb::new("v2_uses_zero_based_pages.db");
    common::seed_reference_members(&test_db.repository());
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/api/v2/members?page=1&size=3&sort=age")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["totalElements"], 4);
    assert_eq!(body["data"]["totalPages"], 2);
    assert_eq!(body["data"]["content"][0]["name"], "member4");
}

#[actix_web::test]
async fn invalid_paging_is_a_bad_request() {
    let test_db = common::TestDb::new("invalid_paging_is_bad_request.db");
    let app = init_app!(test_db);

    for uri in [
        "/api/v3/members?limit=0",
        "/api/v2/members?offset=-1",
        "/api/v3/members?size=500",
        "/api/v1/members?sort=salary",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[actix_web::test]
async fn empty_database_returns_empty_page() {
    let test_db = common::TestDb::new("empty_database_returns_empty_page.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/api/v3/members").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 20);
    assert_eq!(body["data"]["content"], json!([]));
    assert_eq!(body["data"]["totalElements"], 0);
}
