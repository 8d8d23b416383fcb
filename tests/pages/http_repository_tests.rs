use std::sync::Arc;

use confluence_domain_handlers::{
    pages::{
        domain::model::{
            enums::pages_domain_error::PagesDomainError,
            value_objects::{page_id::PageId, page_title::PageTitle},
        },
        infrastructure::repositories::{
            confluence::http_page_repository_impl::HttpPageRepositoryImpl,
            page_repository::PageRepository,
        },
    },
    shared::infrastructure::http::confluence_http_client::ConfluenceHttpClient,
    spaces::domain::model::value_objects::space_id::SpaceId,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

use crate::support::test_config;

fn repository(server: &MockServer) -> HttpPageRepositoryImpl {
    let client = ConfluenceHttpClient::new(&test_config(server.uri())).expect("client");
    HttpPageRepositoryImpl::new(Arc::new(client))
}

fn page_id(value: &str) -> PageId {
    PageId::new(value.to_string()).expect("valid page id")
}

fn page_payload(id: &str, version: u32) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Release notes",
        "spaceId": "98305",
        "status": "current",
        "version": { "number": version },
        "body": { "storage": { "value": "<p>hello</p>", "representation": "storage" } },
        "createdAt": "2024-05-02T14:00:00.000Z"
    })
}

#[tokio::test]
async fn find_by_id_requests_storage_body_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pages/65601"))
        .and(query_param("body-format", "storage"))
        .and(header("authorization", "Bearer token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_payload("65601", 4)))
        .expect(1)
        .mount(&server)
        .await;

    let page = repository(&server)
        .find_by_id(&page_id("65601"))
        .await
        .expect("request should succeed")
        .expect("page should exist");

    assert_eq!(page.version(), Some(4));
    assert_eq!(page.body(), Some("<p>hello</p>"));
    assert_eq!(page.space_id(), Some("98305"));
}

#[tokio::test]
async fn find_by_id_returns_none_on_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pages/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let page = repository(&server)
        .find_by_id(&page_id("1"))
        .await
        .expect("404 is not an error");

    assert!(page.is_none());
}

#[tokio::test]
async fn create_posts_storage_body_with_parent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/pages"))
        .and(body_json(json!({
            "spaceId": "98305",
            "status": "current",
            "title": "Release notes",
            "body": { "representation": "storage", "value": "<p>hello</p>" },
            "parentId": "100"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_payload("65601", 1)))
        .expect(1)
        .mount(&server)
        .await;

    let page = repository(&server)
        .create(
            &SpaceId::new("98305".to_string()).expect("valid space id"),
            &PageTitle::new("Release notes".to_string()).expect("valid title"),
            "<p>hello</p>",
            Some(&page_id("100")),
        )
        .await
        .expect("create should succeed");

    assert_eq!(page.id().value(), "65601");
}

#[tokio::test]
async fn update_puts_next_version_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/pages/65601"))
        .and(body_json(json!({
            "id": "65601",
            "status": "current",
            "title": "Release notes",
            "body": { "representation": "storage", "value": "<p>hello</p>" },
            "version": { "number": 5, "message": "typo" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_payload("65601", 5)))
        .expect(1)
        .mount(&server)
        .await;

    let page = repository(&server)
        .update(
            &page_id("65601"),
            &PageTitle::new("Release notes".to_string()).expect("valid title"),
            "<p>hello</p>",
            5,
            Some("typo"),
        )
        .await
        .expect("update should succeed");

    assert_eq!(page.version(), Some(5));
}

#[tokio::test]
async fn update_maps_404_to_page_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/pages/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = repository(&server)
        .update(
            &page_id("9"),
            &PageTitle::new("Gone".to_string()).expect("valid title"),
            "",
            2,
            None,
        )
        .await;

    assert!(matches!(result, Err(PagesDomainError::PageNotFound(id)) if id == "9"));
}

#[tokio::test]
async fn search_skips_results_without_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/search"))
        .and(query_param("cql", r#"type = page AND text ~ "release""#))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "content": { "id": "65601", "title": "Release notes", "status": "current" } },
                { "title": "ENG", "entityType": "space" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let pages = repository(&server)
        .search(r#"type = page AND text ~ "release""#, Some(10))
        .await
        .expect("search should succeed");

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].title(), "Release notes");
}

#[tokio::test]
async fn list_children_reads_next_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pages/65601/children"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [ { "id": "65602", "title": "Release checklist", "parentId": "65601" } ],
            "_links": { "next": "/wiki/api/v2/pages/65601/children?cursor=xyz&limit=1" }
        })))
        .mount(&server)
        .await;

    let pages = repository(&server)
        .list_children(&page_id("65601"), Some(1), None)
        .await
        .expect("listing should succeed");

    assert_eq!(pages.items()[0].parent_id(), Some("65601"));
    assert_eq!(pages.items()[0].status(), "current");
    assert_eq!(pages.next_cursor(), Some("xyz"));
}

#[tokio::test]
async fn list_by_space_maps_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/spaces/98305/pages"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let result = repository(&server)
        .list_by_space(
            &SpaceId::new("98305".to_string()).expect("valid space id"),
            None,
            None,
        )
        .await;

    assert!(matches!(result, Err(PagesDomainError::InfrastructureError(_))));
}
