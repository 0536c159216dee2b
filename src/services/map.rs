//! Map view preparation.
//!
//! Turns a listing set into plottable markers. Initialization is
//! fallible and returns a `Result` so the caller chooses the fallback
//! presentation, instead of a rendering failure being intercepted
//! somewhere up the stack.

use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::models::{ListingStatus, Property};
use crate::domain::validation::FieldError;

/// Los Angeles, the default viewport when there is nothing to plot.
const DEFAULT_CENTER: (f64, f64) = (34.0522, -118.2437);
const DEFAULT_ZOOM: u8 = 10;

/// One plottable listing.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub property_id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Single-letter badge: `R` for rentals, `S` for everything else.
    pub label: char,
    pub selected: bool,
    pub summary: String,
}

/// Prepared map view: validated markers plus a viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewState {
    pub markers: Vec<MapMarker>,
    /// `(latitude, longitude)` centroid of the markers, or the Los
    /// Angeles default when the listing set is empty.
    pub center: (f64, f64),
    pub zoom: u8,
}

impl MapViewState {
    /// Build a view over `properties`, highlighting `selected_id` if it
    /// occurs in the set.
    ///
    /// Fails with a validation error naming each listing whose stored
    /// coordinates are outside the valid latitude/longitude ranges;
    /// plotting garbage coordinates would silently misplace listings.
    pub fn from_properties(
        properties: &[Property],
        selected_id: Option<&str>,
    ) -> ApiResult<Self> {
        let mut invalid = Vec::new();
        let mut markers = Vec::with_capacity(properties.len());

        for property in properties {
            let (lat, lng) = (property.location.lat, property.location.lng);
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
                invalid.push(FieldError::new(
                    format!("location.{}", property.id),
                    format!("coordinates ({lat}, {lng}) are out of range"),
                ));
                continue;
            }
            markers.push(MapMarker {
                property_id: property.id.clone(),
                latitude: lat,
                longitude: lng,
                label: match property.status {
                    ListingStatus::ForRent => 'R',
                    _ => 'S',
                },
                selected: selected_id == Some(property.id.as_str()),
                summary: property.summary(),
            });
        }

        if !invalid.is_empty() {
            return Err(ApiError::Validation(invalid));
        }

        let center = if markers.is_empty() {
            DEFAULT_CENTER
        } else {
            let n = markers.len() as f64;
            (
                markers.iter().map(|m| m.latitude).sum::<f64>() / n,
                markers.iter().map(|m| m.longitude).sum::<f64>() / n,
            )
        };

        Ok(Self {
            markers,
            center,
            zoom: DEFAULT_ZOOM,
        })
    }
}
