//! Router and the phase-change-diagram handler.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use sv_table::SaturationTable;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
struct AppState {
    table: Arc<SaturationTable>,
}

#[derive(Debug, Deserialize)]
struct PressureQuery {
    /// Saturation pressure [MPa]. Missing or non-numeric values are
    /// rejected by the extractor before the handler runs.
    pressure: f64,
}

#[derive(Debug, Serialize)]
struct VolumesBody {
    specific_volume_liquid: f64,
    specific_volume_vapor: f64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// GET /phase-change-diagram — saturated specific volumes at a pressure.
async fn phase_change_diagram(
    State(state): State<AppState>,
    Query(query): Query<PressureQuery>,
) -> Response {
    match state.table.lookup(query.pressure) {
        Ok(v) => {
            tracing::info!(
                pressure_mpa = query.pressure,
                v_liquid = v.v_liquid,
                v_vapor = v.v_vapor,
                "saturation lookup"
            );
            (
                StatusCode::OK,
                Json(VolumesBody {
                    specific_volume_liquid: v.v_liquid,
                    specific_volume_vapor: v.v_vapor,
                }),
            )
                .into_response()
        }
        Err(err) => {
            tracing::warn!(pressure_mpa = query.pressure, %err, "saturation lookup rejected");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Build the service router around an already-validated table.
pub fn router(table: SaturationTable) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/phase-change-diagram", get(phase_change_diagram))
        .layer(cors)
        .with_state(AppState {
            table: Arc::new(table),
        })
}
