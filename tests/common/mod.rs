use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::Request,
    response::Response,
    Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use stockview_api::{app, config::AppConfig, db, entities, AppState};
use tower::ServiceExt;
use uuid::Uuid;

/// Harness spinning up the application over an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        // A single connection keeps the in-memory database alive and shared.
        let db_config = db::DbConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        };
        let pool = db::establish_connection_with_config(&db_config)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let cfg = AppConfig {
            database_url: db_config.url.clone(),
            host: "127.0.0.1".to_string(),
            port: 18_080,
            environment: "test".to_string(),
            log_level: "info".to_string(),
            log_json: false,
            auto_migrate: false,
        };

        let state = AppState::new(Arc::new(pool), cfg);
        let router = app(state.clone());
        Self { router, state }
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response")
    }

    pub async fn seed_product(
        &self,
        name: Option<&str>,
        code: Option<&str>,
        category: Option<&str>,
        stock: Option<Decimal>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        entities::product::ActiveModel {
            id: Set(id),
            name: Set(name.map(str::to_string)),
            code: Set(code.map(str::to_string)),
            category: Set(category.map(str::to_string)),
            stock: Set(stock),
            promo_price: Set(None),
            regular_price: Set(None),
            cost_usd: Set(None),
            cost_mxn: Set(None),
            image_url: Set(None),
            created_at: Set(Some(Utc::now())),
        }
        .insert(self.state.db.as_ref())
        .await
        .expect("seed product");
        id
    }

    pub async fn seed_movement(
        &self,
        product_id: Uuid,
        movement_type: &str,
        quantity: Option<i64>,
        reference: Option<&str>,
        occurred_at: Option<&str>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        entities::stock_movement::ActiveModel {
            id: Set(id),
            product_id: Set(product_id),
            movement_type: Set(movement_type.to_string()),
            quantity: Set(quantity),
            reference: Set(reference.map(str::to_string)),
            occurred_at: Set(occurred_at.map(str::to_string)),
        }
        .insert(self.state.db.as_ref())
        .await
        .expect("seed movement");
        id
    }
}

pub async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}
