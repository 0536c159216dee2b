/// Search filter criteria for property listings.
///
/// Every constraint except the price range carries tagged presence: an
/// unset `Option` or an empty set/string always means "no restriction",
/// never "match nothing". The price range is always active; `[0, 0]`
/// genuinely means "free properties only".
use serde::{Deserialize, Serialize};

use super::property::{ListingStatus, PropertyType};

/// Filter criteria applied to a property search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Inclusive `(min, max)` price bounds. Always active; there is no
    /// unset sentinel for price.
    pub price_range: (f64, f64),
    /// Allowed property types; empty means any.
    #[serde(default)]
    pub property_type: Vec<PropertyType>,
    /// Minimum number of bedrooms.
    #[serde(default)]
    pub bedrooms: Option<u32>,
    /// Minimum number of bathrooms.
    #[serde(default)]
    pub bathrooms: Option<f32>,
    /// Minimum square footage.
    #[serde(default)]
    pub min_sqft: Option<u32>,
    /// Maximum square footage.
    #[serde(default)]
    pub max_sqft: Option<u32>,
    /// Free-text location term, matched case-insensitively against
    /// address, city, state, and zip code. Empty means any.
    #[serde(default)]
    pub location: String,
    /// Allowed listing statuses; empty means any.
    #[serde(default)]
    pub status: Vec<ListingStatus>,
}

impl Default for SearchFilters {
    /// The UI reset state: wide-open price range, active listings only.
    fn default() -> Self {
        Self {
            price_range: (0.0, 5_000_000.0),
            property_type: Vec::new(),
            bedrooms: None,
            bathrooms: None,
            min_sqft: None,
            max_sqft: None,
            location: String::new(),
            status: vec![ListingStatus::ForSale, ListingStatus::ForRent],
        }
    }
}

impl SearchFilters {
    /// Filters with every optional constraint cleared and the full price
    /// range. Matches every well-formed property.
    pub fn unrestricted() -> Self {
        Self {
            price_range: (0.0, f64::MAX),
            property_type: Vec::new(),
            bedrooms: None,
            bathrooms: None,
            min_sqft: None,
            max_sqft: None,
            location: String::new(),
            status: Vec::new(),
        }
    }

    /// Canonical form: set fields sorted and deduplicated, location
    /// trimmed and lowercased. Two filter values that accept the same
    /// properties normalize to the same value.
    pub fn normalized(&self) -> Self {
        let mut property_type = self.property_type.clone();
        property_type.sort_unstable();
        property_type.dedup();

        let mut status = self.status.clone();
        status.sort_unstable();
        status.dedup();

        Self {
            price_range: self.price_range,
            property_type,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            min_sqft: self.min_sqft,
            max_sqft: self.max_sqft,
            location: self.location.trim().to_lowercase(),
            status,
        }
    }

    /// Stable cache key for this filter set.
    ///
    /// Derived from the normalized form with a fixed field order, so the
    /// key is independent of the order in which set members were supplied.
    pub fn cache_key(&self) -> String {
        let n = self.normalized();
        let types = n
            .property_type
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let statuses = n
            .status
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        fn opt<T: std::fmt::Display>(v: Option<T>) -> String {
            v.map_or_else(|| "any".to_string(), |v| v.to_string())
        }

        format!(
            "properties:price={}-{};type={};beds={};baths={};sqft={}-{};loc={};status={}",
            n.price_range.0,
            n.price_range.1,
            types,
            opt(n.bedrooms),
            opt(n.bathrooms),
            opt(n.min_sqft),
            opt(n.max_sqft),
            n.location,
            statuses
        )
    }

    /// Serialize as URL query pairs for `GET /properties`.
    ///
    /// Array-valued filters become repeated keys, matching the server's
    /// filter-param contract.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("priceRange".to_string(), self.price_range.0.to_string()),
            ("priceRange".to_string(), self.price_range.1.to_string()),
        ];
        for t in &self.property_type {
            pairs.push(("propertyType".to_string(), t.to_string()));
        }
        if let Some(bedrooms) = self.bedrooms {
            pairs.push(("bedrooms".to_string(), bedrooms.to_string()));
        }
        if let Some(bathrooms) = self.bathrooms {
            pairs.push(("bathrooms".to_string(), bathrooms.to_string()));
        }
        if let Some(min_sqft) = self.min_sqft {
            pairs.push(("minSqft".to_string(), min_sqft.to_string()));
        }
        if let Some(max_sqft) = self.max_sqft {
            pairs.push(("maxSqft".to_string(), max_sqft.to_string()));
        }
        if !self.location.is_empty() {
            pairs.push(("location".to_string(), self.location.clone()));
        }
        for s in &self.status {
            pairs.push(("status".to_string(), s.to_string()));
        }
        pairs
    }
}
