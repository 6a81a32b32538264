use axum::{body::Body, http::Request, http::StatusCode};
use parks_of_prague::{build_application, AppConfig, DatabaseConfig, Park, ServerConfig};
use tower::ServiceExt;

fn config(database: DatabaseConfig) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            hostname: "127.0.0.1".into(),
            port: 0,
        },
        database,
        log_level: Some("trace".into()),
    }
}

#[tokio::test]
async fn binds_an_ephemeral_port() {
    let app = build_application(&config(DatabaseConfig::sqlite_in_memory())).await.unwrap();
    assert_ne!(app.local_addr().unwrap().port(), 0);

    let response = app
        .router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn stops_on_shutdown_signal() {
    let app = build_application(&config(DatabaseConfig::sqlite_in_memory())).await.unwrap();
    app.run_until(async {}).await.unwrap();
}

#[tokio::test]
async fn file_backed_sqlite_persists_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.sqlite").to_string_lossy().into_owned();
    let database = DatabaseConfig::Sqlite { path };

    let app = build_application(&config(database.clone())).await.unwrap();
    let saved = app
        .state()
        .parks
        .save(Park::new(
            "Riegrovy sady",
            parks_of_prague::Coordinates {
                latitude: 50.0789,
                longitude: 14.4405,
            },
        ))
        .await
        .unwrap();
    app.state().db.close().await;
    drop(app);

    // Second startup reruns migrations as a no-op and sees the saved row.
    let app = build_application(&config(database)).await.unwrap();
    let parks = app.state().parks.list().await.unwrap();
    assert_eq!(parks, vec![saved]);
}
