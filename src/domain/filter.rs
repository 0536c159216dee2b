//! Filter predicate engine.
//!
//! Pure narrowing of a property list against [`SearchFilters`]: no I/O,
//! no side effects. The server's filter support may be partial, so the
//! orchestrator re-applies these predicates on top of whatever the
//! server already filtered.

use crate::domain::models::{Property, SearchFilters};

/// Returns true if `property` satisfies every active clause in `filters`.
///
/// Each clause is independent and AND-ed: a property fails overall if any
/// clause fails. Empty constraint fields mean "no restriction". The price
/// range is the one exception with no unset form; `(0.0, 0.0)` excludes
/// every positively priced property.
pub fn matches(property: &Property, filters: &SearchFilters) -> bool {
    price_in_range(property, filters)
        && type_allowed(property, filters)
        && enough_bedrooms(property, filters)
        && enough_bathrooms(property, filters)
        && sqft_in_bounds(property, filters)
        && location_matches(property, filters)
        && status_allowed(property, filters)
}

fn price_in_range(property: &Property, filters: &SearchFilters) -> bool {
    let (min, max) = filters.price_range;
    property.price >= min && property.price <= max
}

fn type_allowed(property: &Property, filters: &SearchFilters) -> bool {
    filters.property_type.is_empty()
        || filters.property_type.contains(&property.features.property_type)
}

fn enough_bedrooms(property: &Property, filters: &SearchFilters) -> bool {
    filters
        .bedrooms
        .is_none_or(|min| property.features.bedrooms >= min)
}

fn enough_bathrooms(property: &Property, filters: &SearchFilters) -> bool {
    filters
        .bathrooms
        .is_none_or(|min| property.features.bathrooms >= min)
}

fn sqft_in_bounds(property: &Property, filters: &SearchFilters) -> bool {
    let sqft = property.features.sqft;
    filters.min_sqft.is_none_or(|min| sqft >= min)
        && filters.max_sqft.is_none_or(|max| sqft <= max)
}

/// Case-insensitive substring match against address, city, state, or zip
/// code; any one match passes. Lowercasing is Unicode-aware.
fn location_matches(property: &Property, filters: &SearchFilters) -> bool {
    let term = filters.location.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    let location = &property.location;
    [
        &location.address,
        &location.city,
        &location.state,
        &location.zip_code,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&term))
}

fn status_allowed(property: &Property, filters: &SearchFilters) -> bool {
    filters.status.is_empty() || filters.status.contains(&property.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{
        AgentContact, Features, ListingStatus, Location, PropertyType,
    };

    fn house(price: f64, bedrooms: u32, city: &str, zip: &str, status: ListingStatus) -> Property {
        Property {
            id: format!("{city}-{price}"),
            title: format!("Test home in {city}"),
            description: "Test property".to_string(),
            price,
            location: Location {
                address: "123 Test Street".to_string(),
                city: city.to_string(),
                state: "CA".to_string(),
                zip_code: zip.to_string(),
                lat: 34.0,
                lng: -118.0,
            },
            features: Features {
                bedrooms,
                bathrooms: 2.0,
                sqft: 2_000,
                year_built: 2000,
                property_type: PropertyType::House,
                parking: 2,
            },
            images: vec!["https://example.com/img.jpg".to_string()],
            agent: AgentContact {
                id: "a1".to_string(),
                name: "Agent".to_string(),
                phone: "(555) 000-0000".to_string(),
                email: "agent@realty.com".to_string(),
                avatar: None,
            },
            virtual_tour: None,
            featured: false,
            status,
            listing_date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_unrestricted_filters_match_everything() {
        let filters = SearchFilters::unrestricted();
        let p = house(750_000.0, 3, "Pasadena", "91101", ListingStatus::ForSale);
        assert!(matches(&p, &filters));
    }

    #[test]
    fn test_price_range_is_always_active() {
        let filters = SearchFilters {
            price_range: (0.0, 0.0),
            ..SearchFilters::unrestricted()
        };
        let p = house(1.0, 1, "LA", "90001", ListingStatus::ForSale);
        assert!(!matches(&p, &filters));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filters = SearchFilters {
            price_range: (750_000.0, 750_000.0),
            ..SearchFilters::unrestricted()
        };
        let p = house(750_000.0, 3, "Pasadena", "91101", ListingStatus::ForSale);
        assert!(matches(&p, &filters));
    }

    #[test]
    fn test_bedrooms_is_a_minimum_threshold() {
        let filters = SearchFilters {
            bedrooms: Some(3),
            ..SearchFilters::unrestricted()
        };
        assert!(matches(
            &house(1.0, 4, "LA", "90001", ListingStatus::ForSale),
            &filters
        ));
        assert!(!matches(
            &house(1.0, 2, "LA", "90001", ListingStatus::ForSale),
            &filters
        ));
    }

    #[test]
    fn test_sqft_bounds_checked_independently() {
        let only_min = SearchFilters {
            min_sqft: Some(2_500),
            ..SearchFilters::unrestricted()
        };
        let only_max = SearchFilters {
            max_sqft: Some(1_500),
            ..SearchFilters::unrestricted()
        };
        let p = house(1.0, 3, "LA", "90001", ListingStatus::ForSale);
        assert!(!matches(&p, &only_min));
        assert!(!matches(&p, &only_max));
    }

    #[test]
    fn test_location_is_case_insensitive() {
        let p = house(1.0, 3, "Pasadena", "91101", ListingStatus::ForSale);
        let lower = SearchFilters {
            location: "pasadena".to_string(),
            ..SearchFilters::unrestricted()
        };
        let upper = SearchFilters {
            location: "PASADENA".to_string(),
            ..SearchFilters::unrestricted()
        };
        assert_eq!(matches(&p, &lower), matches(&p, &upper));
        assert!(matches(&p, &lower));
    }

    #[test]
    fn test_location_matches_zip_code() {
        let downtown = house(3_500.0, 2, "Los Angeles", "90013", ListingStatus::ForRent);
        let pasadena = house(750_000.0, 3, "Pasadena", "91101", ListingStatus::ForSale);
        let filters = SearchFilters {
            location: "90013".to_string(),
            ..SearchFilters::unrestricted()
        };
        assert!(matches(&downtown, &filters));
        assert!(!matches(&pasadena, &filters));
    }

    #[test]
    fn test_empty_status_set_means_any() {
        let filters = SearchFilters::unrestricted();
        assert!(matches(
            &house(1.0, 1, "LA", "90001", ListingStatus::Sold),
            &filters
        ));
    }

    #[test]
    fn test_status_set_membership() {
        let filters = SearchFilters {
            status: vec![ListingStatus::ForSale],
            ..SearchFilters::unrestricted()
        };
        assert!(!matches(
            &house(1.0, 1, "LA", "90001", ListingStatus::Sold),
            &filters
        ));
    }

    #[test]
    fn test_spec_scenario_price_bedrooms_status() {
        // $500k-$1M, 3+ bd, For Sale: only the $750k Pasadena house passes.
        let filters = SearchFilters {
            price_range: (500_000.0, 1_000_000.0),
            bedrooms: Some(3),
            status: vec![ListingStatus::ForSale],
            ..SearchFilters::unrestricted()
        };
        let pasadena = house(750_000.0, 3, "Pasadena", "91101", ListingStatus::ForSale);
        let beverly = house(1_250_000.0, 4, "Beverly Hills", "90210", ListingStatus::ForSale);
        assert!(matches(&pasadena, &filters));
        assert!(!matches(&beverly, &filters));
    }
}
