use super::*;
use mockito::Matcher;

const NOVA_JSON: &str = r#"{
    "Id": "cs:trusty/nova-compute-262",
    "Meta": {
        "charm-metadata": {"Name": "nova-compute", "Summary": "OpenStack compute"},
        "stats": {"ArchiveDownloadCount": 12}
    }
}"#;

#[test]
fn test_client_new_with_valid_url() {
    assert!(Client::new("https://api.jujucharms.com/v4").is_ok());
}

#[test]
fn test_client_normalizes_url_without_scheme() {
    let client = Client::new("api.jujucharms.com/v4").unwrap();
    assert_eq!(client.base_url(), "https://api.jujucharms.com/v4");
}

#[test]
fn test_client_removes_trailing_slashes() {
    let client = Client::new("http://localhost:8080/v4///").unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080/v4");
}

#[test]
fn test_client_new_with_empty_url_fails() {
    let result = Client::new("   ");
    assert!(matches!(result.unwrap_err(), QueryError::Validation { .. }));
}

#[test]
fn test_client_config_builders() {
    let config = ClientConfig::new().with_timeout(5).with_max_idle_per_host(2);
    assert_eq!(config.timeout_seconds, 5);
    assert_eq!(config.max_idle_per_host, 2);

    let defaults = ClientConfig::default();
    assert_eq!(defaults.timeout_seconds, 30);
    assert_eq!(defaults.max_idle_per_host, 10);
}

#[test]
fn test_search_params_defaults() {
    let params = SearchParams::new("nova", false);
    assert_eq!(params.text, "nova");
    assert!(params.autocomplete);
    assert!(!params.promulgated_only);
    assert_eq!(params.limit, 25);
}

#[tokio::test]
async fn test_entity_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/trusty/nova-compute/meta/any")
        .match_query(Matcher::AllOf(vec![
            Matcher::Regex("include=charm-metadata".into()),
            Matcher::Regex("include=stats".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(NOVA_JSON)
        .create_async()
        .await;

    let client = Client::new(&server.url()).unwrap();
    let entity = client.entity("trusty/nova-compute").await.unwrap();

    mock.assert_async().await;
    assert_eq!(entity.id, "cs:trusty/nova-compute-262");
    assert_eq!(entity.download_count(), 12);
}

#[tokio::test]
async fn test_entity_namespaced_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/~user/trusty/nova/meta/any")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"Id": "cs:~user/trusty/nova-1", "Meta": {}}"#)
        .create_async()
        .await;

    let client = Client::new(&server.url()).unwrap();
    let entity = client.entity("~user/trusty/nova").await.unwrap();

    mock.assert_async().await;
    assert!(entity.is_bundle());
}

#[tokio::test]
async fn test_entity_not_found() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/nova/meta/any")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"Message": "no matching charm or bundle for cs:nova", "Code": "not found"}"#)
        .create_async()
        .await;

    let client = Client::new(&server.url()).unwrap();
    let err = client.entity("nova").await.unwrap_err();

    mock.assert_async().await;
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "entity not found: nova");
}

#[tokio::test]
async fn test_entity_server_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/nova/meta/any")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let client = Client::new(&server.url()).unwrap();
    let err = client.entity("nova").await.unwrap_err();

    assert!(matches!(err, QueryError::Server { status_code: 503, .. }));
}

#[tokio::test]
async fn test_entity_unexpected_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/nova/meta/any")
        .match_query(Matcher::Any)
        .with_status(418)
        .create_async()
        .await;

    let client = Client::new(&server.url()).unwrap();
    let err = client.entity("nova").await.unwrap_err();

    assert!(matches!(err, QueryError::Network { .. }));
    assert!(err.to_string().contains("418"));
}

#[tokio::test]
async fn test_entity_invalid_json() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/nova/meta/any")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = Client::new(&server.url()).unwrap();
    let err = client.entity("nova").await.unwrap_err();

    assert!(matches!(err, QueryError::Validation { .. }));
}

#[tokio::test]
async fn test_search_sends_parameters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("text".into(), "nova".into()),
            Matcher::UrlEncoded("autocomplete".into(), "1".into()),
            Matcher::UrlEncoded("limit".into(), "25".into()),
            Matcher::Regex("include=charm-metadata".into()),
        ]))
        .with_status(200)
        .with_body(format!(r#"{{"Results": [{}]}}"#, NOVA_JSON))
        .create_async()
        .await;

    let client = Client::new(&server.url()).unwrap();
    let results = client
        .search(&SearchParams::new("nova", false))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].bare_id(), "trusty/nova-compute-262");
}

#[tokio::test]
async fn test_search_promulgated_only() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("promulgated".into(), "1".into()))
        .with_status(200)
        .with_body(r#"{"Results": []}"#)
        .create_async()
        .await;

    let client = Client::new(&server.url()).unwrap();
    let results = client.search(&SearchParams::new("mysql", true)).await.unwrap();

    mock.assert_async().await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_null_results_is_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"Results": null}"#)
        .create_async()
        .await;

    let client = Client::new(&server.url()).unwrap();
    let results = client
        .search(&SearchParams::new("zzz", false))
        .await
        .unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_readme_returns_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/trusty/ghost-6/readme")
        .with_status(200)
        .with_body("# Ghost\n\nA blogging platform.")
        .create_async()
        .await;

    let client = Client::new(&server.url()).unwrap();
    let readme = client.readme("trusty/ghost-6").await.unwrap();

    mock.assert_async().await;
    assert!(readme.starts_with("# Ghost"));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let client = Client::with_config("http://127.0.0.1:1", ClientConfig::new().with_timeout(2))
        .unwrap();
    let err = client.entity("nova").await.unwrap_err();

    assert!(matches!(err, QueryError::Network { .. }));
}

#[test]
fn test_endpoint_encodes_reserved_characters() {
    let client = Client::new("http://localhost:8080/v4").unwrap();
    let url = client
        .endpoint("trusty/nova#1".split('/').chain(["meta", "any"]))
        .unwrap();

    assert_eq!(url.path(), "/v4/trusty/nova%231/meta/any");
    assert!(url.fragment().is_none());
}

#[test]
fn test_endpoint_on_bare_host() {
    let client = Client::new("http://localhost:8080").unwrap();
    let url = client.endpoint(["search"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/search");
}

#[tokio::test]
async fn test_entity_with_hash_keeps_full_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/nova%231/meta/any")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let client = Client::new(&server.url()).unwrap();
    let err = client.entity("nova#1").await.unwrap_err();

    mock.assert_async().await;
    assert!(err.is_not_found());
}
