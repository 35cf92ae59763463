//! Downloads a cookbook from a local HTTP server through the real client.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use chefkit_core::{CookbookSourceError, CookbookSourcePort};
use chefkit_download::{CookbookDownloadError, CookbookDownloader};
use chefkit_http::{ChefClientConfig, DefaultChefClient};
use serde_json::{Value, json};

fn manifest(base: &str) -> Value {
    json!({
        "version": "0.2.1",
        "name": "foo-0.2.1",
        "cookbook_name": "foo",
        "frozen?": false,
        "chef_type": "cookbook_version",
        "json_class": "Chef::CookbookVersion",
        "attributes": [],
        "definitions": [],
        "files": [],
        "libraries": [],
        "providers": [],
        "recipes": [
            {
                "name": "default.rb",
                "path": "recipes/default.rb",
                "checksum": "320sdk2w38020827kdlsdkasbd5454b6",
                "specificity": "default",
                "url": format!("{base}/bookshelf/foo/default_rb")
            }
        ],
        "resources": [],
        "root_files": [
            {
                "name": "metadata.rb",
                "path": "metadata.rb",
                "checksum": "14963c5b685f3a15ea90ae51bd5454b6",
                "specificity": "default",
                "url": format!("{base}/bookshelf/foo/metadata_rb")
            }
        ],
        "templates": [],
        "metadata": {},
        "access": {}
    })
}

async fn cookbook_version(
    State(base): State<Arc<String>>,
    headers: HeaderMap,
) -> Result<axum::Json<Value>, StatusCode> {
    if headers.get("accept").and_then(|v| v.to_str().ok()) != Some("application/json") {
        return Err(StatusCode::NOT_ACCEPTABLE);
    }
    Ok(axum::Json(manifest(&base)))
}

/// Start a server on an ephemeral port and return its base URL.
async fn serve() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let base = format!("http://{addr}");

    let app = Router::new()
        .route("/cookbooks/foo/0.2.1", get(cookbook_version))
        .route(
            "/cookbooks/foo/:version",
            get(|| async { StatusCode::NOT_FOUND }),
        )
        .route("/bookshelf/foo/metadata_rb", get(|| async { "name 'foo'" }))
        .route(
            "/bookshelf/foo/default_rb",
            get(|| async { "log 'this is a resource'" }),
        )
        .route(
            "/bookshelf/foo/broken",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .with_state(Arc::new(base.clone()));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    base
}

fn downloader(base: &str) -> CookbookDownloader {
    let config = ChefClientConfig::new().with_base_url(base);
    let client: Arc<dyn CookbookSourcePort> = Arc::new(DefaultChefClient::new(&config).unwrap());
    CookbookDownloader::new(client)
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[tokio::test]
async fn test_unknown_version_is_a_404_and_writes_nothing() {
    let base = serve().await;
    let temp = tempfile::tempdir().unwrap();

    let err = downloader(&base)
        .download_at("foo", "2.1.0", temp.path())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("404"), "{err}");
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_latest_is_requested_for_empty_version() {
    let base = serve().await;
    let temp = tempfile::tempdir().unwrap();

    let err = downloader(&base)
        .download_at("foo", "", temp.path())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("/cookbooks/foo/_latest"), "{err}");
}

#[tokio::test]
async fn test_downloads_cookbook_tree() {
    let base = serve().await;
    let temp = tempfile::tempdir().unwrap();

    let path = downloader(&base)
        .download_at("foo", "0.2.1", temp.path())
        .await
        .unwrap();

    assert_eq!(path, temp.path().join("foo-0.2.1"));
    assert_eq!(read(&path.join("metadata.rb")), "name 'foo'");
    assert_eq!(
        read(&path.join("recipes").join("default.rb")),
        "log 'this is a resource'"
    );
    assert!(!path.join("templates").exists());
}

#[tokio::test]
async fn test_second_download_overwrites() {
    let base = serve().await;
    let temp = tempfile::tempdir().unwrap();
    let downloader = downloader(&base);

    let path = downloader
        .download_at("foo", "0.2.1", temp.path())
        .await
        .unwrap();
    std::fs::write(
        path.join("metadata.rb"),
        "name 'something else entirely, and longer'",
    )
    .unwrap();

    downloader
        .download_at("foo", "0.2.1", temp.path())
        .await
        .unwrap();

    assert_eq!(read(&path.join("metadata.rb")), "name 'foo'");
}

#[tokio::test]
async fn test_failed_transfer_leaves_no_file() {
    let base = serve().await;
    let temp = tempfile::tempdir().unwrap();
    let config = ChefClientConfig::new().with_base_url(&base);
    let client = DefaultChefClient::new(&config).unwrap();
    let destination = temp.path().join("broken.rb");

    let err = client
        .fetch_file(&format!("{base}/bookshelf/foo/broken"), &destination)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(!destination.exists());
}

#[tokio::test]
async fn test_unwritable_file_aborts_download() {
    let base = serve().await;
    let temp = tempfile::tempdir().unwrap();
    let blocked = temp.path().join("foo-0.2.1").join("metadata.rb");
    std::fs::create_dir_all(&blocked).unwrap();

    let err = downloader(&base)
        .download_at("foo", "0.2.1", temp.path())
        .await
        .unwrap_err();

    assert!(
        matches!(err, CookbookDownloadError::Source(CookbookSourceError::Io { .. })),
        "{err}"
    );
    assert!(
        err.to_string()
            .starts_with(&format!("{}: ", blocked.display())),
        "{err}"
    );
    assert!(blocked.is_dir());
    assert!(!temp.path().join("foo-0.2.1").join("recipes").exists());
}
