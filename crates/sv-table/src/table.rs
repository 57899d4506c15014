//! Saturation table and the lookup algorithm.
//!
//! The table is an ordered sequence of calibration points, strictly
//! increasing in pressure, whose last entry is the critical point (liquid
//! and vapor specific volumes coincide). `lookup` resolves a pressure in
//! this priority order:
//!
//! 1. at or above the critical pressure → clamp to the critical volume
//! 2. bit-exact match on a table pressure → stored values, unrounded
//! 3. below the table minimum → `LookupError::BelowMinimum`
//! 4. otherwise → linear interpolation between the bracketing entries,
//!    rounded to 6 decimals
//!
//! The clamp means no upper-bound error exists; only sub-minimum
//! pressures are rejected. Rounding follows `f64::round` (ties away from
//! zero) applied at the 6th decimal.

use crate::error::{LookupError, LookupResult, TableError};

/// One calibration point on the saturation curve.
///
/// Units: pressure in MPa, specific volumes in m³/kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationPoint {
    pub pressure_mpa: f64,
    pub v_liquid: f64,
    pub v_vapor: f64,
}

impl SaturationPoint {
    pub const fn new(pressure_mpa: f64, v_liquid: f64, v_vapor: f64) -> Self {
        Self {
            pressure_mpa,
            v_liquid,
            v_vapor,
        }
    }
}

/// Specific volumes of the two coexisting phases at a saturation pressure.
///
/// At the critical point the phases are indistinguishable and the two
/// fields are equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturatedVolumes {
    pub v_liquid: f64,
    pub v_vapor: f64,
}

/// Immutable, pressure-ordered saturation table.
///
/// Constructed once at startup via [`SaturationTable::new`] (which
/// validates the ordering and critical-point invariants) and never
/// mutated; sharing it across request handlers needs no locking.
#[derive(Debug, Clone, PartialEq)]
pub struct SaturationTable {
    points: Vec<SaturationPoint>,
}

impl SaturationTable {
    /// Build a table from calibration points, validating the invariants:
    /// at least 2 points, all values finite, pressures strictly
    /// increasing, and the last entry a critical point (equal volumes).
    pub fn new(points: Vec<SaturationPoint>) -> Result<Self, TableError> {
        if points.len() < 2 {
            return Err(TableError::TooFewPoints { len: points.len() });
        }
        for p in &points {
            if !p.pressure_mpa.is_finite() {
                return Err(TableError::NonFinite { what: "pressure" });
            }
            if !p.v_liquid.is_finite() {
                return Err(TableError::NonFinite {
                    what: "liquid specific volume",
                });
            }
            if !p.v_vapor.is_finite() {
                return Err(TableError::NonFinite {
                    what: "vapor specific volume",
                });
            }
        }
        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].pressure_mpa <= pair[0].pressure_mpa {
                return Err(TableError::NotIncreasing { index: index + 1 });
            }
        }
        let last = points[points.len() - 1];
        if last.v_liquid != last.v_vapor {
            return Err(TableError::CriticalMismatch);
        }
        Ok(Self { points })
    }

    /// Lowest supported saturation pressure [MPa].
    pub fn min_pressure(&self) -> f64 {
        self.points[0].pressure_mpa
    }

    /// Critical pressure [MPa]; pressures at or above clamp here.
    pub fn critical_pressure(&self) -> f64 {
        self.points[self.points.len() - 1].pressure_mpa
    }

    /// Specific volume [m³/kg] shared by both phases at the critical point.
    pub fn critical_volume(&self) -> f64 {
        self.points[self.points.len() - 1].v_liquid
    }

    /// Calibration points in increasing pressure order.
    pub fn points(&self) -> &[SaturationPoint] {
        &self.points
    }

    /// Resolve the saturated specific volumes at `pressure` [MPa].
    ///
    /// Exact table matches return stored values verbatim; interpolated
    /// and critical-clamp results are rounded to 6 decimals. The only
    /// rejections are non-finite input and pressures below
    /// [`min_pressure`](Self::min_pressure).
    pub fn lookup(&self, pressure: f64) -> LookupResult<SaturatedVolumes> {
        if !pressure.is_finite() {
            return Err(LookupError::NonFinite { value: pressure });
        }

        // Clamp first: the critical row itself is resolved here, not by
        // the exact-match scan, with identical numbers.
        if pressure >= self.critical_pressure() {
            let v = self.critical_volume();
            return Ok(SaturatedVolumes {
                v_liquid: v,
                v_vapor: v,
            });
        }

        if let Some(p) = self.points.iter().find(|p| p.pressure_mpa == pressure) {
            return Ok(SaturatedVolumes {
                v_liquid: p.v_liquid,
                v_vapor: p.v_vapor,
            });
        }

        if pressure < self.min_pressure() {
            return Err(LookupError::BelowMinimum {
                min_mpa: self.min_pressure(),
            });
        }

        // First entry strictly above the input; the guards above ensure
        // 1 <= idx <= len - 1, so the bracket indices are in range.
        let idx = self
            .points
            .partition_point(|p| p.pressure_mpa <= pressure);
        let lo = self.points[idx - 1];
        let hi = self.points[idx];

        Ok(SaturatedVolumes {
            v_liquid: round6(interpolate(
                pressure,
                lo.pressure_mpa,
                hi.pressure_mpa,
                lo.v_liquid,
                hi.v_liquid,
            )),
            v_vapor: round6(interpolate(
                pressure,
                lo.pressure_mpa,
                hi.pressure_mpa,
                lo.v_vapor,
                hi.v_vapor,
            )),
        })
    }
}

/// Linear interpolation of `(x1, y1)..(x2, y2)` at `x`.
fn interpolate(x: f64, x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
    y1 + (y2 - y1) * (x - x1) / (x2 - x1)
}

/// Round to 6 decimal places, ties away from zero (`f64::round`).
fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn table() -> SaturationTable {
        crate::reference::reference_water()
    }

    proptest! {
        #[test]
        fn interpolant_stays_within_bracket(p in 0.05f64..10.0) {
            let table = table();
            let v = table.lookup(p).unwrap();
            let idx = table
                .points()
                .partition_point(|pt| pt.pressure_mpa <= p)
                .min(table.points().len() - 1);
            let lo = table.points()[idx.saturating_sub(1)];
            let hi = table.points()[idx];
            let (f_min, f_max) = (lo.v_liquid.min(hi.v_liquid), lo.v_liquid.max(hi.v_liquid));
            let (g_min, g_max) = (lo.v_vapor.min(hi.v_vapor), lo.v_vapor.max(hi.v_vapor));
            // 1e-9 slack covers the 6-decimal rounding at bracket edges.
            prop_assert!(v.v_liquid >= f_min - 1e-9 && v.v_liquid <= f_max + 1e-9);
            prop_assert!(v.v_vapor >= g_min - 1e-9 && v.v_vapor <= g_max + 1e-9);
        }

        #[test]
        fn lookup_is_idempotent(p in -1.0f64..20.0) {
            let table = table();
            let first = table.lookup(p);
            let second = table.lookup(p);
            match (first, second) {
                (Ok(a), Ok(b)) => {
                    prop_assert_eq!(a.v_liquid.to_bits(), b.v_liquid.to_bits());
                    prop_assert_eq!(a.v_vapor.to_bits(), b.v_vapor.to_bits());
                }
                (Err(a), Err(b)) => prop_assert_eq!(a, b),
                (a, b) => prop_assert!(false, "diverging outcomes: {:?} vs {:?}", a, b),
            }
        }

        #[test]
        fn no_pressure_panics(p in proptest::num::f64::ANY) {
            let _ = table().lookup(p);
        }
    }
}
