use std::fs;

use qrgen_engine::{
    DownloadError, Downloader, FailureKind, HttpDownloader, RequestSettings, DOWNLOAD_FILENAME,
};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn download_saves_bytes_under_fixed_filename() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/upload/fl_attachment/x.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"png-bytes".to_vec()))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let downloader = HttpDownloader::new(RequestSettings::default()).expect("downloader");
    let url = format!("{}/upload/fl_attachment/x.png", server.uri());

    let outcome = downloader
        .download(&url, temp.path())
        .await
        .expect("download ok");

    assert_eq!(outcome.path.file_name().unwrap(), DOWNLOAD_FILENAME);
    assert_eq!(outcome.byte_len, 9);
    assert_eq!(fs::read(&outcome.path).unwrap(), b"png-bytes");
}

#[tokio::test]
async fn download_replaces_previous_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/upload/fl_attachment/x.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"new".to_vec()))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(DOWNLOAD_FILENAME), b"old").unwrap();

    let downloader = HttpDownloader::new(RequestSettings::default()).expect("downloader");
    let url = format!("{}/upload/fl_attachment/x.png", server.uri());

    let outcome = downloader
        .download(&url, temp.path())
        .await
        .expect("download ok");
    assert_eq!(fs::read(&outcome.path).unwrap(), b"new");
}

#[tokio::test]
async fn failed_download_leaves_no_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/upload/fl_attachment/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let downloader = HttpDownloader::new(RequestSettings::default()).expect("downloader");
    let url = format!("{}/upload/fl_attachment/missing.png", server.uri());

    let err = downloader.download(&url, temp.path()).await.unwrap_err();
    match err {
        DownloadError::Fetch(service) => assert_eq!(service.kind, FailureKind::HttpStatus(404)),
        DownloadError::Persist(other) => panic!("unexpected persist error: {other}"),
    }
    assert!(!temp.path().join(DOWNLOAD_FILENAME).exists());
}

#[tokio::test]
async fn unparseable_url_is_rejected_without_io() {
    let temp = TempDir::new().unwrap();
    let downloader = HttpDownloader::new(RequestSettings::default()).expect("downloader");

    let err = downloader
        .download("not a url", temp.path())
        .await
        .unwrap_err();
    match err {
        DownloadError::Fetch(service) => assert_eq!(service.kind, FailureKind::InvalidUrl),
        DownloadError::Persist(other) => panic!("unexpected persist error: {other}"),
    }
    assert!(!temp.path().join(DOWNLOAD_FILENAME).exists());
}
