use super::*;

#[test]
fn success_is_2xx_only() {
    assert!(FetchResponse::ok("{}").is_success());
    assert!(FetchResponse::status(204).is_success());
    assert!(!FetchResponse::status(304).is_success());
    assert!(!FetchResponse::status(404).is_success());
    assert!(!FetchResponse::status(500).is_success());
}

#[test]
fn normalize_rel_path_cleans_and_rejects_traversal() {
    assert_eq!(normalize_rel_path("data.json").unwrap(), "data.json");
    assert_eq!(normalize_rel_path("/./content//data.json").unwrap(), "content/data.json");
    assert_eq!(normalize_rel_path("content\\data.json").unwrap(), "content/data.json");
    assert!(normalize_rel_path("../secret.json").is_err());
    assert!(normalize_rel_path("/").is_err());
}

#[tokio::test]
async fn dir_fetcher_reads_files_and_ignores_query() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("data.json"), br#"{"projects":[]}"#).unwrap();

    let fetcher = DirFetcher::new(dir.path());
    let req = ContentRequest::new("data.json")
        .unwrap()
        .with_cache_bust("v", 42);
    let resp = fetcher.get(&req).await.unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, br#"{"projects":[]}"#);
}

#[tokio::test]
async fn dir_fetcher_answers_404_for_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = DirFetcher::new(dir.path());
    let resp = fetcher
        .get(&ContentRequest::new("data.json").unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status, 404);
    assert!(!resp.is_success());
}

#[tokio::test]
async fn dir_fetcher_refuses_traversal() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = DirFetcher::new(dir.path());
    let err = fetcher
        .get(&ContentRequest::new("../data.json").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, FolioError::Validation(_)));
}

#[tokio::test]
async fn dir_fetcher_wraps_unreadable_resources() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("data.json")).unwrap();

    let err = DirFetcher::new(dir.path())
        .get(&ContentRequest::new("data.json").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, FolioError::Other(_)));
    assert!(err.to_string().contains("data.json"));
}
