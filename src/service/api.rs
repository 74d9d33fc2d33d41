use crate::{
    application::{
        transactions::{DEFAULT_LIMIT, MAX_LIMIT},
        Application,
    },
    domain::{
        errors::ApplicationError,
        models::{FeeReport, TransactionSummary},
        navigation::{Navigation, NAVIGATION},
    },
    infrastructure::shutdown::ShutdownChannel,
};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::{any::Any, sync::Arc};
use thiserror::Error;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

/// Successful response envelope: `{ "ok": true, "data": ... }`.
#[derive(Serialize, Debug)]
pub struct ApiResponse<T> {
    ok: bool,
    data: T,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self { ok: true, data })
    }
}

#[derive(Serialize, Debug)]
struct ErrorBody {
    error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing address")]
    MissingAddress,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Invalid Solana address")]
    InvalidAddress,
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingAddress | ApiError::InvalidBody(_) | ApiError::InvalidAddress => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::InvalidAddress(_) => ApiError::InvalidAddress,
            ApplicationError::BcClient(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);
    ApiError::Internal("Internal server error".to_string()).into_response()
}

pub fn router<A>(app: Arc<A>) -> Router
where
    A: Application + Send + Sync + 'static,
{
    Router::new()
        .route("/api/fees", get(get_fees::<A>))
        .route("/api/wallets/transactions", post(get_wallet_transactions::<A>))
        .route("/api/navigation", get(get_navigation))
        .with_state(app)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn start_server(
    shutdown: ShutdownChannel,
    app: Arc<impl Application + Send + Sync + 'static>,
    listen_port: u16,
) -> anyhow::Result<()> {
    let app = router(app);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", listen_port)).await?;

    tracing::info!("API server started on port {}", listen_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.wait().await;
            tracing::warn!("API server received shutdown signal");
        })
        .await?;

    Ok(())
}

async fn get_fees<A: Application + Send + Sync + 'static>(
    State(app_state): State<Arc<A>>,
) -> Result<Json<ApiResponse<FeeReport>>, ApiError> {
    let report = app_state.estimate_fees().await?;
    Ok(ApiResponse::ok(report))
}

#[derive(Deserialize, Debug)]
struct WalletTransactionsRequest {
    #[serde(default)]
    address: Option<serde_json::Value>,
    #[serde(default)]
    limit: Option<usize>,
}

async fn get_wallet_transactions<A: Application + Send + Sync + 'static>(
    State(app_state): State<Arc<A>>,
    body: Bytes,
) -> Result<Json<ApiResponse<Vec<TransactionSummary>>>, ApiError> {
    // Parsed by hand so a JSON body is accepted whatever its Content-Type.
    let request: WalletTransactionsRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    let address = match request.address {
        Some(serde_json::Value::String(address)) if !address.is_empty() => address,
        _ => return Err(ApiError::MissingAddress),
    };
    let limit = request.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let transactions = app_state.get_wallet_transactions(&address, limit).await?;
    Ok(ApiResponse::ok(transactions))
}

async fn get_navigation() -> Json<ApiResponse<Navigation>> {
    ApiResponse::ok(NAVIGATION)
}
