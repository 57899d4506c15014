//! Embedded reference saturation table for water.
//!
//! Pressure in MPa, specific volumes in m³/kg. The last row is the
//! critical point (liquid and vapor volumes coincide at 0.0035).

use crate::table::{SaturationPoint, SaturationTable};

const REFERENCE_WATER: [SaturationPoint; 13] = [
    SaturationPoint::new(0.05, 0.001050, 30.000000),
    SaturationPoint::new(0.1, 0.001080, 20.000000),
    SaturationPoint::new(0.5, 0.001200, 15.000000),
    SaturationPoint::new(1.0, 0.001600, 8.000000),
    SaturationPoint::new(2.0, 0.001900, 6.500000),
    SaturationPoint::new(3.0, 0.002200, 5.500000),
    SaturationPoint::new(4.0, 0.002400, 5.000000),
    SaturationPoint::new(5.0, 0.002500, 4.500000),
    SaturationPoint::new(6.0, 0.002900, 4.000000),
    SaturationPoint::new(7.0, 0.003200, 3.200000),
    SaturationPoint::new(8.0, 0.003350, 2.100000),
    SaturationPoint::new(9.0, 0.003450, 1.100000),
    SaturationPoint::new(10.0, 0.003500, 0.003500),
];

/// The embedded water table, validated on construction.
pub fn reference_water() -> SaturationTable {
    SaturationTable::new(REFERENCE_WATER.to_vec()).expect("embedded reference table is valid")
}

impl SaturationTable {
    /// Convenience constructor for the embedded water table.
    pub fn reference_water() -> Self {
        reference_water()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table_satisfies_invariants() {
        let table = reference_water();
        assert_eq!(table.points().len(), 13);
        assert_eq!(table.min_pressure(), 0.05);
        assert_eq!(table.critical_pressure(), 10.0);
        assert_eq!(table.critical_volume(), 0.0035);
    }
}
