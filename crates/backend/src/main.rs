pub mod api;
pub mod dashboards;
pub mod domain;
pub mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log to stdout and to a file under target/logs
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqlx=warn,sea_orm=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Request logging middleware: method, path, status, duration, body size
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        use axum::body::to_bytes;

        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;
        let (parts, body) = response.into_parts();

        let bytes = match to_bytes(body, usize::MAX).await {
            Ok(b) => b,
            Err(_) => {
                tracing::warn!(
                    "{} {} -> {} in {}ms (body not readable)",
                    method,
                    uri.path(),
                    parts.status.as_u16(),
                    start.elapsed().as_millis()
                );
                return Response::from_parts(parts, Body::default());
            }
        };

        tracing::info!(
            "{} {} -> {} in {}ms, {} bytes",
            method,
            uri.path(),
            parts.status.as_u16(),
            start.elapsed().as_millis(),
            bytes.len()
        );

        Response::from_parts(parts, Body::from(bytes))
    }

    // Initialize database (path comes from config.toml)
    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config)?;
    shared::data::db::initialize_database(db_path.to_str())
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // Patient handlers
        .route(
            "/api/patients",
            get(api::handlers::a001_patient::list_all).post(api::handlers::a001_patient::upsert),
        )
        .route(
            "/api/patients/:id",
            get(api::handlers::a001_patient::get_by_id)
                .delete(api::handlers::a001_patient::delete),
        )
        .route(
            "/api/patients/testdata",
            post(api::handlers::a001_patient::insert_test_data),
        )
        // Diet chart handlers
        .route(
            "/api/diet_charts",
            get(api::handlers::a002_diet_chart::list_all)
                .post(api::handlers::a002_diet_chart::upsert),
        )
        .route(
            "/api/diet_charts/:id",
            get(api::handlers::a002_diet_chart::get_by_id)
                .delete(api::handlers::a002_diet_chart::delete),
        )
        .route(
            "/api/diet_charts/testdata",
            post(api::handlers::a002_diet_chart::insert_test_data),
        )
        // Meal delivery handlers
        .route(
            "/api/meal_deliveries",
            get(api::handlers::a003_meal_delivery::list_all)
                .post(api::handlers::a003_meal_delivery::upsert),
        )
        .route(
            "/api/meal_deliveries/:id",
            get(api::handlers::a003_meal_delivery::get_by_id)
                .delete(api::handlers::a003_meal_delivery::delete),
        )
        .route(
            "/api/meal_deliveries/:id/deliver",
            post(api::handlers::a003_meal_delivery::mark_delivered),
        )
        .route(
            "/api/meal_deliveries/testdata",
            post(api::handlers::a003_meal_delivery::insert_test_data),
        )
        // D100 Pantry Performance Dashboard
        .route(
            "/api/pantry/performance",
            get(api::handlers::d100_pantry_performance::get_performance),
        )
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], 3000).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port 3000 is already in use. Please ensure no other process is using this port."
                );
            } else {
                tracing::error!("Failed to bind to port 3000. Error: {}", e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
