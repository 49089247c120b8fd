use sechub_ingest::{import_catalog, ImportOptions};
use sechub_model::{Resource, Vendor};
use sechub_query::UseCaseFactory;
use sechub_server::{build_router, ApiConfig, AppState};
use sechub_store::{
    FileResourceRepository, FileVendorRepository, MemoryResourceRepository,
    MemoryVendorRepository, SqliteDatabase, SqliteResourceRepository, SqliteVendorRepository,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

const APACHE_LATEST_RULES: &str = "customRules:\n  rules-apache.yaml: |-\n    - macro: apache_consider_syscalls\n      condition: (evt.num < 0)\n      version: 1.0.1\n";

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .join("fixtures")
}

fn file_factory() -> UseCaseFactory {
    UseCaseFactory::new(
        Arc::new(
            FileResourceRepository::from_path(fixtures_root().join("resources"))
                .expect("resource repo"),
        ),
        Arc::new(
            FileVendorRepository::from_path(fixtures_root().join("vendors"))
                .expect("vendor repo"),
        ),
    )
}

async fn spawn_app(factory: UseCaseFactory, api: ApiConfig) -> SocketAddr {
    let app = build_router(AppState::new(factory, api));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("serve app")
    });
    addr
}

async fn send_raw(
    addr: SocketAddr,
    method: &str,
    path: &str,
    headers: &[(&str, &str)],
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    for (name, value) in headers {
        req.push_str(&format!("{name}: {value}\r\n"));
    }
    req.push_str("\r\n");
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("status");
    (status, head.to_ascii_lowercase(), body.to_string())
}

async fn get(addr: SocketAddr, path: &str) -> (u16, String, String) {
    send_raw(addr, "GET", path, &[]).await
}

fn labels(body: &str) -> Vec<String> {
    let items: Vec<serde_json::Value> = serde_json::from_str(body).expect("json array");
    items
        .iter()
        .map(|r| {
            format!(
                "{}@{}",
                r["id"].as_str().expect("id"),
                r["version"].as_str().expect("version")
            )
        })
        .collect()
}

#[tokio::test]
async fn health_answers_plain_ok() {
    let addr = spawn_app(file_factory(), ApiConfig::default()).await;
    let (status, head, body) = get(addr, "/health").await;
    assert_eq!(status, 200);
    assert!(head.contains("content-type: text/plain"));
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn resources_list_latest_versions_and_every_version() {
    let addr = spawn_app(file_factory(), ApiConfig::default()).await;

    let (status, head, body) = get(addr, "/resources").await;
    assert_eq!(status, 200);
    assert!(head.contains("content-type: application/json"));
    assert!(body.ends_with('\n'));
    assert_eq!(labels(&body), vec!["apache@1.0.1", "mongodb@1.0.0"]);

    let (status, _, body) = get(addr, "/resources/apache/versions").await;
    assert_eq!(status, 200);
    assert_eq!(labels(&body), vec!["apache@1.0.1", "apache@1.0.0"]);

    let (status, _, body) = get(addr, "/resources/Apache").await;
    assert_eq!(status, 200);
    let latest: serde_json::Value = serde_json::from_str(&body).expect("resource json");
    assert_eq!(latest["version"], "1.0.1");
    assert_eq!(latest["shortDescription"], "Falco rules for securing Apache HTTP Server");

    let (status, _, body) = get(addr, "/resources/apache/versions/1.0.0").await;
    assert_eq!(status, 200);
    let pinned: serde_json::Value = serde_json::from_str(&body).expect("resource json");
    assert_eq!(pinned["version"], "1.0.0");
}

#[tokio::test]
async fn helm_rules_are_served_as_yaml() {
    let addr = spawn_app(file_factory(), ApiConfig::default()).await;

    let (status, head, body) = get(addr, "/resources/apache/custom-rules.yaml").await;
    assert_eq!(status, 200);
    assert!(head.contains("content-type: application/x-yaml"));
    assert_eq!(body, APACHE_LATEST_RULES);

    let (status, _, body) = get(addr, "/resources/apache/versions/1.0.0/custom-rules.yaml").await;
    assert_eq!(status, 200);
    assert_eq!(body, APACHE_LATEST_RULES.replace("1.0.1", "1.0.0"));
}

#[tokio::test]
async fn vendors_and_vendor_resources() {
    let addr = spawn_app(file_factory(), ApiConfig::default()).await;

    let (status, _, body) = get(addr, "/vendors").await;
    assert_eq!(status, 200);
    let vendors: Vec<serde_json::Value> = serde_json::from_str(&body).expect("vendors json");
    assert_eq!(vendors.len(), 2);

    let (status, _, body) = get(addr, "/vendors/mongo").await;
    assert_eq!(status, 200);
    let vendor: serde_json::Value = serde_json::from_str(&body).expect("vendor json");
    assert_eq!(vendor["name"], "Mongo");
    assert_eq!(vendor["id"], "mongo");

    let (status, _, body) = get(addr, "/vendors/apache/resources").await;
    assert_eq!(status, 200);
    assert_eq!(labels(&body), vec!["apache@1.0.1"]);
}

#[tokio::test]
async fn catalog_errors_are_500_with_the_plain_message() {
    let addr = spawn_app(file_factory(), ApiConfig::default()).await;

    let (status, head, body) = get(addr, "/resources/unknown").await;
    assert_eq!(status, 500);
    assert!(head.contains("content-type: text/plain"));
    assert_eq!(body, "not found");

    let (status, _, body) = get(addr, "/resources/apache/versions/9.9.9").await;
    assert_eq!(status, 500);
    assert_eq!(body, "not found");
}

#[tokio::test]
async fn unknown_vendor_and_vendor_without_resources_fail_differently() {
    let factory = UseCaseFactory::new(
        Arc::new(MemoryResourceRepository::new(vec![Resource {
            name: "Nginx".to_string(),
            vendor: "Nginx".to_string(),
            version: "1.0.0".to_string(),
            ..Resource::default()
        }])),
        Arc::new(MemoryVendorRepository::new(vec![
            Vendor {
                name: "Apache".to_string(),
                ..Vendor::default()
            },
            Vendor {
                name: "Nginx".to_string(),
                ..Vendor::default()
            },
        ])),
    );
    let addr = spawn_app(factory, ApiConfig::default()).await;

    let (unknown_status, _, unknown_body) = get(addr, "/vendors/not-a-vendor/resources").await;
    let (empty_status, _, empty_body) = get(addr, "/vendors/apache/resources").await;
    assert_eq!(unknown_status, 500);
    assert_eq!(empty_status, 500);
    assert_ne!(unknown_body, empty_body);
}

#[tokio::test]
async fn not_found_status_can_be_switched_to_404() {
    let api = ApiConfig {
        not_found_status_404: true,
        ..ApiConfig::default()
    };
    let addr = spawn_app(file_factory(), api).await;
    let (status, _, body) = get(addr, "/resources/unknown").await;
    assert_eq!(status, 404);
    assert_eq!(body, "not found");
    let (status, _, _) = get(addr, "/resources/apache").await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn unknown_paths_fall_through_to_404() {
    let addr = spawn_app(file_factory(), ApiConfig::default()).await;
    let (status, _, body) = get(addr, "/resources/apache/versions/1.0.0/extra").await;
    assert_eq!(status, 404);
    assert_eq!(body, "404 page not found\n");
    let (status, _, _) = get(addr, "/").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn cors_is_permissive_on_every_route() {
    let addr = spawn_app(file_factory(), ApiConfig::default()).await;

    let (status, head, _) = send_raw(
        addr,
        "GET",
        "/resources",
        &[("Origin", "https://hub.example.org")],
    )
    .await;
    assert_eq!(status, 200);
    assert!(head.contains("access-control-allow-origin: *"));

    let (status, head, _) = send_raw(
        addr,
        "OPTIONS",
        "/vendors",
        &[
            ("Origin", "https://hub.example.org"),
            ("Access-Control-Request-Method", "GET"),
        ],
    )
    .await;
    assert_eq!(status, 204);
    assert!(head.contains("access-control-allow-origin: *"));
    assert!(head.contains("access-control-allow-methods: get,head,options"));
    assert!(!head.contains("post"));
}

#[tokio::test]
async fn database_backend_serves_the_imported_catalog() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let db = Arc::new(SqliteDatabase::open(&tmp.path().join("hub.sqlite")).expect("open db"));
    import_catalog(
        &db,
        &FileVendorRepository::from_path(fixtures_root().join("vendors")).expect("vendor repo"),
        &FileResourceRepository::from_path(fixtures_root().join("resources"))
            .expect("resource repo"),
        ImportOptions::default(),
    )
    .expect("import fixtures");
    let factory = UseCaseFactory::new(
        Arc::new(SqliteResourceRepository::new(Arc::clone(&db))),
        Arc::new(SqliteVendorRepository::new(db)),
    );
    let addr = spawn_app(factory, ApiConfig::default()).await;

    let (status, _, body) = get(addr, "/resources").await;
    assert_eq!(status, 200);
    assert_eq!(labels(&body), vec!["apache@1.0.1", "mongodb@1.0.0"]);

    let (status, _, body) = get(addr, "/resources/apache/custom-rules.yaml").await;
    assert_eq!(status, 200);
    assert_eq!(body, APACHE_LATEST_RULES);

    let (status, _, body) = get(addr, "/vendors/apache/resources").await;
    assert_eq!(status, 200);
    assert_eq!(labels(&body), vec!["apache@1.0.1"]);
}
