use crate::cli::ServeArgs;
use crate::infra::{sample_roster, AppState, InMemoryEmployeeStore};
use crate::routes::with_registry_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use employee_registry::config::AppConfig;
use employee_registry::directory::EmployeeRegistry;
use employee_registry::error::AppError;
use employee_registry::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if args.seed_demo {
        config.seed_demo_roster = true;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(InMemoryEmployeeStore::default());
    let registry = Arc::new(EmployeeRegistry::new(store));

    if config.seed_demo_roster {
        for record in sample_roster() {
            let id = record.id.clone();
            if let Err(err) = registry.insert(record) {
                warn!(%id, %err, "skipping sample roster record");
            }
        }
        info!("sample roster admitted");
    }

    let app = with_registry_routes(registry)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "employee registry ready");

    axum::serve(listener, app).await?;
    Ok(())
}
