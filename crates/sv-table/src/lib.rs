//! sv-table: saturation-curve lookup for phase-change diagrams.
//!
//! Provides:
//! - `SaturationPoint` / `SaturationTable`: an immutable, pressure-ordered
//!   calibration table ending at the critical point
//! - `SaturationTable::lookup`: exact-match or linearly interpolated
//!   specific volumes for a given saturation pressure
//! - the embedded reference water table (0.05 MPa → 10 MPa critical)
//!
//! # Architecture
//!
//! The table is built once at process start and shared read-only; `lookup`
//! is a pure function with no I/O, so concurrent callers need no
//! coordination. The HTTP boundary lives in a separate crate and only sees
//! `SaturatedVolumes` / `LookupError`.
//!
//! # Example
//!
//! ```
//! use sv_table::SaturationTable;
//!
//! let table = SaturationTable::reference_water();
//! let v = table.lookup(1.5).unwrap();
//! assert_eq!(v.v_liquid, 0.001750);
//! assert_eq!(v.v_vapor, 7.250000);
//! ```

pub mod error;
pub mod reference;
pub mod table;

// Re-exports for ergonomics
pub use error::{LookupError, LookupResult, TableError};
pub use table::{SaturatedVolumes, SaturationPoint, SaturationTable};
