use confluence_domain_handlers::search::domain::{
    model::{
        enums::search_domain_error::SearchDomainError,
        queries::search_content_query::SearchContentQuery, value_objects::cql_query::CqlQuery,
    },
    services::content_search_query_service::ContentSearchQueryService,
};

use crate::support::{
    blog_post_result, create_service_harness, fakes::RecordedSearch, page_result,
};

#[test]
fn raw_cql_takes_precedence_over_text() {
    let query = SearchContentQuery::new(
        Some(" type = blogpost ".to_string()),
        Some("ignored".to_string()),
        None,
        None,
        None,
    )
    .expect("valid query");

    assert_eq!(query.cql().value(), "type = blogpost");
}

#[test]
fn text_is_quoted_into_a_full_text_clause() {
    let query = SearchContentQuery::new(None, Some(r#"the "plan""#.to_string()), None, None, None)
        .expect("valid query");

    assert_eq!(query.cql().value(), r#"text ~ "the \"plan\"""#);
}

#[test]
fn missing_criteria_is_rejected() {
    let result = SearchContentQuery::new(None, None, Some(10), None, None);

    assert!(matches!(result, Err(SearchDomainError::MissingSearchCriteria)));
}

#[test]
fn blank_cql_reports_its_label() {
    let result = CqlQuery::new("  ".to_string());

    assert!(matches!(result, Err(error) if error.to_string() == "CQL cannot be empty"));
}

#[tokio::test]
async fn handle_search_forwards_paging_to_repository() {
    let harness = create_service_harness(vec![page_result(), blog_post_result()], Some("n2"));
    let query = SearchContentQuery::new(
        Some("space = ENG".to_string()),
        None,
        Some(2),
        Some(4),
        Some("n1".to_string()),
    )
    .expect("valid query");

    let results = harness
        .service
        .handle_search(query)
        .await
        .expect("search should succeed");

    assert_eq!(results.items().len(), 2);
    assert_eq!(results.next_cursor(), Some("n2"));
    assert_eq!(
        harness.repository.searches(),
        vec![RecordedSearch {
            cql: "space = ENG".to_string(),
            limit: Some(2),
            start: Some(4),
            cursor: Some("n1".to_string()),
        }]
    );
}
