use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{startup, state::AppState};

mod user;

/// Serves the full application, middleware included, over the given database.
fn test_server(db: &DatabaseConnection) -> TestServer {
    let app = startup::build_app(AppState::new(db.clone()), None).unwrap();

    TestServer::new(app)
}
