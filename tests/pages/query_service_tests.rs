use confluence_domain_handlers::pages::domain::{
    model::{
        enums::pages_domain_error::PagesDomainError,
        queries::{
            get_child_pages_query::GetChildPagesQuery, get_page_query::GetPageQuery,
            get_pages_by_space_query::GetPagesBySpaceQuery, search_pages_query::SearchPagesQuery,
        },
    },
    services::page_query_service::PageQueryService,
};

use crate::support::{child_page, create_service_harness, release_notes_page};

#[tokio::test]
async fn handle_get_returns_page_with_body() {
    let harness = create_service_harness(vec![release_notes_page()]);

    let page = harness
        .query_service
        .handle_get(GetPageQuery::new(" 65601 ".to_string()).expect("valid query"))
        .await
        .expect("page should be found");

    assert_eq!(page.title(), "Release notes");
    assert_eq!(page.body(), Some("<p>v1.2 shipped</p>"));
}

#[tokio::test]
async fn handle_get_returns_not_found_for_unknown_page() {
    let harness = create_service_harness(vec![release_notes_page()]);

    let result = harness
        .query_service
        .handle_get(GetPageQuery::new("404".to_string()).expect("valid query"))
        .await;

    assert!(matches!(result, Err(PagesDomainError::PageNotFound(id)) if id == "404"));
}

#[tokio::test]
async fn handle_search_builds_escaped_cql_restricted_to_pages() {
    let harness = create_service_harness(vec![release_notes_page()]);
    let query = SearchPagesQuery::new(
        r#"say "hi" \o/"#.to_string(),
        Some("ENG".to_string()),
        Some(5),
    )
    .expect("valid query");

    let pages = harness
        .query_service
        .handle_search(query)
        .await
        .expect("search should succeed");

    assert_eq!(pages.len(), 1);
    assert_eq!(
        harness.repository.searches(),
        vec![(
            r#"type = page AND text ~ "say \"hi\" \\o/" AND space = "ENG""#.to_string(),
            Some(5)
        )]
    );
}

#[tokio::test]
async fn handle_search_without_space_key_omits_space_clause() {
    let harness = create_service_harness(vec![]);
    let query = SearchPagesQuery::new("roadmap".to_string(), None, None).expect("valid query");

    harness
        .query_service
        .handle_search(query)
        .await
        .expect("search should succeed");

    assert_eq!(
        harness.repository.searches(),
        vec![(r#"type = page AND text ~ "roadmap""#.to_string(), None)]
    );
}

#[test]
fn search_query_rejects_blank_text() {
    let result = SearchPagesQuery::new("   ".to_string(), None, None);

    assert!(matches!(
        result,
        Err(PagesDomainError::Validation(error)) if error.to_string() == "Query cannot be empty"
    ));
}

#[tokio::test]
async fn handle_list_by_space_forwards_paging() {
    let harness = create_service_harness(vec![release_notes_page(), child_page()]);
    let query = GetPagesBySpaceQuery::new("98305".to_string(), Some(25), Some("abc".to_string()))
        .expect("valid query");

    let pages = harness
        .query_service
        .handle_list_by_space(query)
        .await
        .expect("listing should succeed");

    assert_eq!(pages.items().len(), 2);
    assert_eq!(pages.next_cursor(), Some("next-page"));
    assert_eq!(
        harness.repository.listings(),
        vec![("space:98305".to_string(), Some(25), Some("abc".to_string()))]
    );
}

#[tokio::test]
async fn handle_list_children_returns_only_children() {
    let harness = create_service_harness(vec![release_notes_page(), child_page()]);
    let query = GetChildPagesQuery::new("65601".to_string(), None, None).expect("valid query");

    let pages = harness
        .query_service
        .handle_list_children(query)
        .await
        .expect("listing should succeed");

    assert_eq!(pages.items().len(), 1);
    assert_eq!(pages.items()[0].title(), "Release checklist");
    assert_eq!(pages.next_cursor(), None);
}

#[tokio::test]
async fn repository_failures_surface_as_infrastructure_errors() {
    let harness = create_service_harness(vec![release_notes_page()]);
    harness.repository.fail_with("connection reset");

    let result = harness
        .query_service
        .handle_get(GetPageQuery::new("65601".to_string()).expect("valid query"))
        .await;

    assert!(matches!(
        result,
        Err(PagesDomainError::InfrastructureError(message)) if message == "connection reset"
    ));
}
