//! # Bearing Designation Catalog
//!
//! Maps a required dynamic load rating to a deep groove ball bearing
//! designation via fixed capacity bands. Each shaft position has its own
//! table because the two bearing seats take different bore series.
//!
//! The tables are plain ordered data rather than branch cascades so they can
//! be tested and extended independently of the reaction arithmetic.
//!
//! ## Band semantics
//!
//! Bands are half-open `[min, max)`: a capacity exactly equal to a band's
//! upper threshold takes the next band up, since a requirement that has
//! reached a bearing's rated limit is no longer served by that bearing.
//! The final band of each table is open-ended and acts as the catch-all for
//! capacities beyond the last threshold.
//!
//! ## Example
//!
//! ```rust
//! use bearing_core::catalog::DesignationTable;
//!
//! let designation = DesignationTable::BEARING_1.classify(1502.8825);
//! assert_eq!(designation, "61800");
//! ```

/// One capacity band of a designation table.
///
/// `max_capacity_n` is exclusive; the catch-all band uses `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignationBand {
    /// Inclusive lower capacity bound (N)
    pub min_capacity_n: f64,
    /// Exclusive upper capacity bound (N)
    pub max_capacity_n: f64,
    /// Catalog designation selected for this band
    pub designation: &'static str,
}

/// Ordered capacity bands for one bearing position.
#[derive(Debug, Clone, Copy)]
pub struct DesignationTable {
    /// Human-readable position name (e.g. "bearing 1")
    pub position: &'static str,
    /// Bands in ascending capacity order; the last band is unbounded
    pub bands: &'static [DesignationBand],
}

impl DesignationTable {
    /// Designation bands for bearing 1 (between gear and shaft end)
    #[rustfmt::skip]
    pub const BEARING_1: DesignationTable = DesignationTable {
        position: "bearing 1",
        bands: &[
            DesignationBand { min_capacity_n: 0.0, max_capacity_n: 1480.0, designation: "6000" },
            DesignationBand { min_capacity_n: 1480.0, max_capacity_n: 4620.0, designation: "61800" },
            DesignationBand { min_capacity_n: 4620.0, max_capacity_n: 5070.0, designation: "6200" },
            DesignationBand { min_capacity_n: 5070.0, max_capacity_n: f64::INFINITY, designation: "6300" },
        ],
    };

    /// Designation bands for bearing 2 (next to the overhung pulley)
    #[rustfmt::skip]
    pub const BEARING_2: DesignationTable = DesignationTable {
        position: "bearing 2",
        bands: &[
            DesignationBand { min_capacity_n: 0.0, max_capacity_n: 2700.0, designation: "61805" },
            DesignationBand { min_capacity_n: 2700.0, max_capacity_n: 7020.0, designation: "16404" },
            DesignationBand { min_capacity_n: 7020.0, max_capacity_n: 9360.0, designation: "6004" },
            DesignationBand { min_capacity_n: 9360.0, max_capacity_n: 12700.0, designation: "6204" },
            DesignationBand { min_capacity_n: 12700.0, max_capacity_n: 15900.0, designation: "6304" },
            DesignationBand { min_capacity_n: 15900.0, max_capacity_n: f64::INFINITY, designation: "6404" },
        ],
    };

    /// Find the band covering a required capacity.
    ///
    /// Scans in ascending order and returns the first band whose exclusive
    /// upper bound exceeds the capacity. Non-positive capacities land in the
    /// first band (the smallest bearing trivially satisfies them); anything
    /// at or beyond the last threshold, and NaN, lands in the catch-all.
    pub fn band_for(&self, capacity_n: f64) -> Option<&'static DesignationBand> {
        self.bands
            .iter()
            .find(|band| capacity_n < band.max_capacity_n)
            .or_else(|| self.bands.last())
    }

    /// Get the designation for a required capacity.
    pub fn classify(&self, capacity_n: f64) -> &'static str {
        self.band_for(capacity_n).map_or("", |band| band.designation)
    }
}
