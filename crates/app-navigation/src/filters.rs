//! Search filters
//!
//! This module provides the filter structure carried by search-result
//! destinations: collection/material/availability sets and a validated
//! inclusive price range.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors that can occur constructing a filter value
#[derive(Debug, Error)]
pub enum FilterError {
    /// Price range bounds are inverted
    #[error("Invalid price range: lower bound {lower} exceeds upper bound {upper}")]
    InvertedPriceRange {
        /// Requested lower bound
        lower: u64,
        /// Requested upper bound
        upper: u64,
    },
}

/// Result type for filter construction
pub type Result<T> = std::result::Result<T, FilterError>;

/// An inclusive price range in minor currency units.
///
/// Bounds are unsigned, so non-negativity holds by construction;
/// [`PriceRange::new`] rejects inverted bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    lower: u64,
    upper: u64,
}

impl PriceRange {
    /// Create a price range, rejecting `lower > upper`.
    pub fn new(lower: u64, upper: u64) -> Result<Self> {
        if lower > upper {
            return Err(FilterError::InvertedPriceRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Inclusive lower bound.
    pub fn lower(&self) -> u64 {
        self.lower
    }

    /// Inclusive upper bound.
    pub fn upper(&self) -> u64 {
        self.upper
    }

    /// Check if a price falls within the range.
    pub fn contains(&self, price: u64) -> bool {
        self.lower <= price && price <= self.upper
    }
}

/// Stock availability states shown in catalog and search screens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Available for immediate purchase
    InStock,
    /// Last pieces remaining
    LowStock,
    /// Currently unavailable
    OutOfStock,
    /// Accepting pre-orders
    PreOrder,
}

/// Filters narrowing a search-results destination.
///
/// Sets use `BTreeSet` so the containing destination stays hashable with
/// deterministic ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Collection identifiers to restrict to
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub collections: BTreeSet<String>,

    /// Inclusive price range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,

    /// Material names to restrict to
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub materials: BTreeSet<String>,

    /// Availability states to restrict to
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub availability: BTreeSet<Availability>,
}

impl SearchFilters {
    /// Create an empty filter set (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no filter criteria are set.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
            && self.price_range.is_none()
            && self.materials.is_empty()
            && self.availability.is_empty()
    }

    /// Restrict to a collection.
    pub fn with_collection(mut self, id: impl Into<String>) -> Self {
        self.collections.insert(id.into());
        self
    }

    /// Restrict to a price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    /// Restrict to a material.
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.materials.insert(material.into());
        self
    }

    /// Restrict to an availability state.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability.insert(availability);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_rejects_inverted_bounds() {
        assert!(matches!(
            PriceRange::new(500, 300),
            Err(FilterError::InvertedPriceRange {
                lower: 500,
                upper: 300
            })
        ));
    }

    #[test]
    fn test_price_range_accepts_equal_bounds() {
        let range = PriceRange::new(300, 300).unwrap();
        assert!(range.contains(300));
        assert!(!range.contains(299));
        assert!(!range.contains(301));
    }

    #[test]
    fn test_price_range_contains_is_inclusive() {
        let range = PriceRange::new(100, 200).unwrap();
        assert!(range.contains(100));
        assert!(range.contains(200));
        assert!(!range.contains(99));
        assert!(!range.contains(201));
    }

    #[test]
    fn test_empty_filters() {
        let filters = SearchFilters::new();
        assert!(filters.is_empty());

        let filters = filters.with_material("titanium");
        assert!(!filters.is_empty());
    }

    #[test]
    fn test_filters_structural_equality() {
        let a = SearchFilters::new()
            .with_collection("navitimer")
            .with_availability(Availability::InStock);
        let b = SearchFilters::new()
            .with_availability(Availability::InStock)
            .with_collection("navitimer");
        // Insertion order does not matter
        assert_eq!(a, b);
    }

    #[test]
    fn test_filters_serialization() {
        let filters = SearchFilters::new()
            .with_collection("chronomat")
            .with_price_range(PriceRange::new(500_000, 1_200_000).unwrap())
            .with_availability(Availability::PreOrder);
        let json = serde_json::to_string(&filters).unwrap();
        let parsed: SearchFilters = serde_json::from_str(&json).unwrap();
        assert_eq!(filters, parsed);
    }
}
