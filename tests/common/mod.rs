//! Shared fixtures for integration tests: a small listing set with
//! known prices, locations, and statuses.

#![allow(dead_code)]

use hearth::{AgentContact, Features, ListingStatus, Location, Property, PropertyType};

pub fn beverly_hills_villa() -> Property {
    Property {
        id: "1".to_string(),
        title: "Modern Luxury Villa".to_string(),
        description: "Stunning contemporary villa with panoramic city views.".to_string(),
        price: 1_250_000.0,
        location: Location {
            address: "123 Beverly Hills Dr".to_string(),
            city: "Beverly Hills".to_string(),
            state: "CA".to_string(),
            zip_code: "90210".to_string(),
            lat: 34.0736,
            lng: -118.4004,
        },
        features: Features {
            bedrooms: 4,
            bathrooms: 3.5,
            sqft: 3_200,
            year_built: 2020,
            property_type: PropertyType::House,
            parking: 2,
        },
        images: vec!["https://example.com/villa-1.jpg".to_string()],
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

pub fn downtown_loft() -> Property {
    Property {
        id: "2".to_string(),
        title: "Downtown Loft".to_string(),
        description: "Industrial-chic loft in the heart of downtown.".to_string(),
        price: 3_500.0,
        location: Location {
            address: "456 Main Street".to_string(),
            city: "Los Angeles".to_string(),
            state: "CA".to_string(),
            zip_code: "90013".to_string(),
            lat: 34.0407,
            lng: -118.2468,
        },
        features: Features {
            bedrooms: 2,
            bathrooms: 2.0,
            sqft: 1_400,
            year_built: 2015,
            property_type: PropertyType::Apartment,
            parking: 1,
        },
        images: vec!["https://example.com/loft-1.jpg".to_string()],
        agent: AgentContact {
            id: "agent2".to_string(),
            name: "Michael Chen".to_string(),
            phone: "(555) 234-5678".to_string(),
            email: "michael.chen@realty.com".to_string(),
            avatar: None,
        },
        virtual_tour: None,
        featured: false,
        status: ListingStatus::ForRent,
        listing_date: "2024-02-01".to_string(),
    }
}

pub fn pasadena_home() -> Property {
    Property {
        id: "3".to_string(),
        title: "Charming Family Home".to_string(),
        description: "Beautiful traditional home in a quiet neighborhood.".to_string(),
        price: 750_000.0,
        location: Location {
            address: "789 Oak Street".to_string(),
            city: "Pasadena".to_string(),
            state: "CA".to_string(),
            zip_code: "91101".to_string(),
            lat: 34.1478,
            lng: -118.1445,
        },
        features: Features {
            bedrooms: 3,
            bathrooms: 3.0,
            sqft: 2_100,
            year_built: 1995,
            property_type: PropertyType::House,
            parking: 2,
        },
        images: vec!["https://example.com/home-1.jpg".to_string()],
        agent: AgentContact {
            id: "agent3".to_string(),
            name: "Emily Rodriguez".to_string(),
            phone: "(555) 456-7890".to_string(),
            email: "emily.rodriguez@realty.com".to_string(),
            avatar: None,
        },
        virtual_tour: None,
        featured: true,
        status: ListingStatus::ForSale,
        listing_date: "2024-01-20".to_string(),
    }
}

pub fn weho_condo() -> Property {
    Property {
        id: "4".to_string(),
        title: "Sleek Modern Condo".to_string(),
        description: "Designer condo with floor-to-ceiling windows.".to_string(),
        price: 2_800_000.0,
        location: Location {
            address: "321 Sunset Blvd".to_string(),
            city: "West Hollywood".to_string(),
            state: "CA".to_string(),
            zip_code: "90069".to_string(),
            lat: 34.0900,
            lng: -118.3617,
        },
        features: Features {
            bedrooms: 3,
            bathrooms: 2.5,
            sqft: 1_900,
            year_built: 2021,
            property_type: PropertyType::Condo,
            parking: 2,
        },
        images: vec!["https://example.com/condo-1.jpg".to_string()],
        agent: AgentContact {
            id: "agent1".to_string(),
            name: "Sarah Johnson".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: "sarah.johnson@realty.com".to_string(),
            avatar: None,
        },
        virtual_tour: Some("https://example.com/tour/4".to_string()),
        featured: false,
        status: ListingStatus::ForSale,
        listing_date: "2024-02-10".to_string(),
    }
}

pub fn sample_listings() -> Vec<Property> {
    vec![
        beverly_hills_villa(),
        downtown_loft(),
        pasadena_home(),
        weho_condo(),
    ]
}

pub fn listings_json(listings: &[Property]) -> String {
    serde_json::to_string(listings).expect("fixtures serialize")
}
