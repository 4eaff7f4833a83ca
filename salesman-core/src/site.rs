//! Labelled locations a tour may visit.

use geo::Coord;

/// A caller-labelled stop with a position.
///
/// The label is opaque to the solvers; it is carried so a solved tour can be
/// reported in the caller's own terms, typically a street address.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use salesman_core::Site;
///
/// let site = Site::new("1 Main Street", Coord { x: -0.12, y: 51.5 });
/// assert_eq!(site.label, "1 Main Street");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Site {
    /// Caller-facing name, e.g. an address.
    pub label: String,
    /// Geospatial position as longitude (`x`) and latitude (`y`).
    pub location: Coord<f64>,
}

impl Site {
    /// Construct a site from a label and a position.
    #[must_use]
    pub fn new(label: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            label: label.into(),
            location,
        }
    }
}
