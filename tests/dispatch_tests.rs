//! Integration tests for the dynamic dispatch entry point.
//!
//! These tests verify kind-string parsing, the pre-flight failures for
//! unknown kinds and mismatched parameters, and the normalized response
//! shapes for each kind family.

use jsonapi_provider::{
    BaseUrl, DataProvider, DeleteManyParams, GetListParams, GetOneParams, ProviderConfig,
    ProviderError, RequestKind, RequestParams,
};
use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_provider(server: &MockServer) -> DataProvider {
    let config = ProviderConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    DataProvider::new(config)
}

#[tokio::test]
async fn test_dispatch_get_list_returns_records_and_total() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "1", "type": "posts", "attributes": {"title": "Dune"}},
                {"id": "2", "type": "posts", "attributes": {"title": "Dune Messiah"}}
            ]
        })))
        .mount(&server)
        .await;

    let provider = create_provider(&server);
    let response = provider
        .dispatch(
            "GET_LIST",
            "posts",
            RequestParams::GetList(GetListParams::default()),
        )
        .await
        .unwrap();

    assert_eq!(response.total, Some(2));
    assert_eq!(
        response.data,
        json!([
            {"id": "1", "title": "Dune"},
            {"id": "2", "title": "Dune Messiah"}
        ])
    );
}

#[tokio::test]
async fn test_dispatch_get_one_returns_single_record_without_total() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "1", "type": "posts", "attributes": {"title": "Dune"}}
        })))
        .mount(&server)
        .await;

    let provider = create_provider(&server);
    let response = provider
        .dispatch(
            "GET_ONE",
            "posts",
            RequestParams::GetOne(GetOneParams { id: json!(1) }),
        )
        .await
        .unwrap();

    assert!(response.total.is_none());
    assert_eq!(response.data, json!({"id": "1", "title": "Dune"}));
}

#[tokio::test]
async fn test_dispatch_delete_many_echoes_ids() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let provider = create_provider(&server);
    let response = provider
        .dispatch(
            "DELETE_MANY",
            "posts",
            RequestParams::DeleteMany(DeleteManyParams {
                ids: vec![json!(1), json!(2)],
            }),
        )
        .await
        .unwrap();

    assert!(response.total.is_none());
    assert_eq!(response.data, json!([1, 2]));
}

#[tokio::test]
async fn test_dispatch_unknown_kind_fails_before_any_request() {
    let server = MockServer::start().await;
    // The mock server must never be reached
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let provider = create_provider(&server);
    let result = provider
        .dispatch(
            "MADE_UP",
            "posts",
            RequestParams::GetList(GetListParams::default()),
        )
        .await;

    match result {
        Err(ProviderError::UnsupportedRequestType { kind }) => assert_eq!(kind, "MADE_UP"),
        other => panic!("expected an unsupported-request-type error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_dispatch_mismatched_params_fail_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let provider = create_provider(&server);
    let result = provider
        .dispatch(
            "GET_ONE",
            "posts",
            RequestParams::GetList(GetListParams::default()),
        )
        .await;

    assert!(matches!(
        result,
        Err(ProviderError::ParamsMismatch {
            kind: RequestKind::GetOne
        })
    ));
}

#[tokio::test]
async fn test_dispatch_kind_strings_are_case_sensitive() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let provider = create_provider(&server);
    let result = provider
        .dispatch(
            "get_list",
            "posts",
            RequestParams::GetList(GetListParams::default()),
        )
        .await;

    assert!(matches!(
        result,
        Err(ProviderError::UnsupportedRequestType { .. })
    ));
}
