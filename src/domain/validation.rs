//! Field-level validation of user input before submission.
//!
//! Mirrors the server's acceptance rules so malformed payloads are
//! rejected locally with messages the UI can attach to individual fields.

use chrono::{Datelike, Utc};

use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::models::{Credentials, NewProperty, SearchFilters};

/// A single validation failure attached to a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn into_result(errors: Vec<FieldError>) -> ApiResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

/// Zip codes are `12345` or `12345-6789`.
fn is_valid_zip(zip: &str) -> bool {
    let bytes = zip.as_bytes();
    match bytes.len() {
        5 => bytes.iter().all(u8::is_ascii_digit),
        10 => {
            bytes[..5].iter().all(u8::is_ascii_digit)
                && bytes[5] == b'-'
                && bytes[6..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

/// Minimal shape check, not RFC 5322: something@something.something.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Validate a listing draft before `POST /properties`.
pub fn validate_new_property(property: &NewProperty) -> ApiResult<()> {
    let mut errors = Vec::new();

    if property.title.is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    } else if property.title.len() > 200 {
        errors.push(FieldError::new("title", "Title too long"));
    }
    if property.description.len() < 10 {
        errors.push(FieldError::new(
            "description",
            "Description must be at least 10 characters",
        ));
    }
    if property.price <= 0.0 {
        errors.push(FieldError::new("price", "Price must be positive"));
    }

    if property.location.address.is_empty() {
        errors.push(FieldError::new("location.address", "Address is required"));
    }
    if property.location.city.is_empty() {
        errors.push(FieldError::new("location.city", "City is required"));
    }
    if property.location.state.len() != 2 {
        errors.push(FieldError::new(
            "location.state",
            "State must be 2 characters",
        ));
    }
    if !is_valid_zip(&property.location.zip_code) {
        errors.push(FieldError::new("location.zipCode", "Invalid zip code format"));
    }
    if !(-90.0..=90.0).contains(&property.location.lat) {
        errors.push(FieldError::new("location.lat", "Invalid latitude"));
    }
    if !(-180.0..=180.0).contains(&property.location.lng) {
        errors.push(FieldError::new("location.lng", "Invalid longitude"));
    }

    if property.features.sqft == 0 {
        errors.push(FieldError::new("features.sqft", "Square footage must be positive"));
    }
    let max_year = Utc::now().year() + 1;
    if property.features.year_built < 1800 || property.features.year_built > max_year {
        errors.push(FieldError::new(
            "features.yearBuilt",
            format!("Year built must be between 1800 and {max_year}"),
        ));
    }
    if property.features.bathrooms < 0.0 {
        errors.push(FieldError::new("features.bathrooms", "Bathrooms cannot be negative"));
    }

    if property.images.is_empty() {
        errors.push(FieldError::new("images", "At least one image is required"));
    }

    into_result(errors)
}

/// Validate a filter set before it is used in a search.
pub fn validate_filters(filters: &SearchFilters) -> ApiResult<()> {
    let mut errors = Vec::new();
    let (min, max) = filters.price_range;

    if min < 0.0 || max < 0.0 {
        errors.push(FieldError::new("priceRange", "Price bounds cannot be negative"));
    }
    if min > max {
        errors.push(FieldError::new(
            "priceRange",
            "Minimum price cannot exceed maximum price",
        ));
    }
    if let (Some(min_sqft), Some(max_sqft)) = (filters.min_sqft, filters.max_sqft) {
        if min_sqft > max_sqft {
            errors.push(FieldError::new(
                "minSqft",
                "Minimum square footage cannot exceed maximum",
            ));
        }
    }
    if filters.bathrooms.is_some_and(|b| b < 0.0) {
        errors.push(FieldError::new("bathrooms", "Bathrooms cannot be negative"));
    }

    into_result(errors)
}

/// Validate login credentials before `POST /auth/login`.
pub fn validate_credentials(credentials: &Credentials) -> ApiResult<()> {
    let mut errors = Vec::new();

    if !looks_like_email(&credentials.email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }
    if credentials.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }

    into_result(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{
        AgentContact, Features, ListingStatus, Location, PropertyType,
    };

    fn draft() -> NewProperty {
        NewProperty {
            title: "Modern Luxury Residence".to_string(),
            description: "Stunning contemporary home with panoramic views.".to_string(),
            price: 1_250_000.0,
            location: Location {
                address: "123 Skyline Drive".to_string(),
                city: "Beverly Hills".to_string(),
                state: "CA".to_string(),
                zip_code: "90210".to_string(),
                lat: 34.0901,
                lng: -118.4065,
            },
            features: Features {
                bedrooms: 4,
                bathrooms: 3.0,
                sqft: 3_200,
                year_built: 2020,
                property_type: PropertyType::House,
                parking: 2,
            },
            images: vec!["https://example.com/hero.jpg".to_string()],
            agent: AgentContact {
                id: "agent1".to_string(),
                name: "Sarah Johnson".to_string(),
                phone: "(555) 123-4567".to_string(),
                email: "sarah.johnson@realty.com".to_string(),
                avatar: None,
            },
            virtual_tour: None,
            featured: true,
            status: ListingStatus::ForSale,
            listing_date: "2024-01-15".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate_new_property(&draft()).is_ok());
    }

    #[test]
    fn test_collects_multiple_field_errors() {
        let mut p = draft();
        p.title = String::new();
        p.price = -1.0;
        p.images.clear();
        let err = validate_new_property(&p).unwrap_err();
        match err {
            ApiError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert!(fields.contains(&"title"));
                assert!(fields.contains(&"price"));
                assert!(fields.contains(&"images"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_zip_format() {
        assert!(is_valid_zip("90013"));
        assert!(is_valid_zip("90013-1234"));
        assert!(!is_valid_zip("9001"));
        assert!(!is_valid_zip("90013-12"));
        assert!(!is_valid_zip("9001a"));
    }

    #[test]
    fn test_coordinates_out_of_range() {
        let mut p = draft();
        p.location.lat = 91.0;
        p.location.lng = -200.0;
        let err = validate_new_property(&p).unwrap_err();
        match err {
            ApiError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_inverted_price_range_rejected() {
        let filters = SearchFilters {
            price_range: (1_000_000.0, 500_000.0),
            ..SearchFilters::default()
        };
        assert!(validate_filters(&filters).is_err());
    }

    #[test]
    fn test_zero_zero_price_range_is_valid() {
        // [0, 0] is a legitimate (if strict) range, not an error.
        let filters = SearchFilters {
            price_range: (0.0, 0.0),
            ..SearchFilters::default()
        };
        assert!(validate_filters(&filters).is_ok());
    }

    #[test]
    fn test_credentials() {
        assert!(validate_credentials(&Credentials {
            email: "alice@example.com".to_string(),
            password: "hunter2!".to_string(),
        })
        .is_ok());
        assert!(validate_credentials(&Credentials {
            email: "not-an-email".to_string(),
            password: "hunter2!".to_string(),
        })
        .is_err());
        assert!(validate_credentials(&Credentials {
            email: "alice@example.com".to_string(),
            password: String::new(),
        })
        .is_err());
    }
}
