//! sv-server: HTTP boundary for the saturation-volume lookup.
//!
//! One route, `GET /phase-change-diagram?pressure=<float>`, backed by the
//! immutable reference table from `sv-table`. Permissive CORS; no auth,
//! no persistence. All per-request logging happens here, never in the
//! lookup core.

pub mod routes;

pub use routes::router;
