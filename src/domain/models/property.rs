/// Domain models for property listings.
///
/// Wire shapes match the listings API contract: camelCase object keys and
/// the human-readable enum strings (`"For Sale"`, `"House"`, ...). A
/// `Property` is immutable from the client's perspective; mutations happen
/// only through the API and are reflected by cache invalidation.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of dwelling a listing describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
        };
        write!(f, "{s}")
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "house" => Ok(PropertyType::House),
            "apartment" => Ok(PropertyType::Apartment),
            "condo" => Ok(PropertyType::Condo),
            "townhouse" => Ok(PropertyType::Townhouse),
            other => Err(format!(
                "unknown property type '{other}' (expected house, apartment, condo, or townhouse)"
            )),
        }
    }
}

/// Listing lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "For Rent")]
    ForRent,
    Sold,
    Pending,
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ListingStatus::ForSale => "For Sale",
            ListingStatus::ForRent => "For Rent",
            ListingStatus::Sold => "Sold",
            ListingStatus::Pending => "Pending",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "for sale" | "forsale" => Ok(ListingStatus::ForSale),
            "for rent" | "forrent" => Ok(ListingStatus::ForRent),
            "sold" => Ok(ListingStatus::Sold),
            "pending" => Ok(ListingStatus::Pending),
            other => Err(format!(
                "unknown listing status '{other}' (expected for-sale, for-rent, sold, or pending)"
            )),
        }
    }
}

/// Street address and coordinates of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    /// Two-letter state code
    pub state: String,
    pub zip_code: String,
    /// Latitude in degrees, -90..=90
    pub lat: f64,
    /// Longitude in degrees, -180..=180
    pub lng: f64,
}

/// Physical characteristics of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub bedrooms: u32,
    /// Half-baths count as 0.5
    pub bathrooms: f32,
    pub sqft: u32,
    pub year_built: i32,
    pub property_type: PropertyType,
    /// Number of parking spaces
    pub parking: u32,
}

/// Listing agent contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentContact {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A property listing as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Server-assigned opaque identifier
    pub id: String,
    pub title: String,
    pub description: String,
    /// Sale price or monthly rent, always positive
    pub price: f64,
    pub location: Location,
    pub features: Features,
    /// Ordered image URLs, never empty
    pub images: Vec<String>,
    pub agent: AgentContact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_tour: Option<String>,
    pub featured: bool,
    pub status: ListingStatus,
    /// ISO date string as sent by the API
    pub listing_date: String,
}

/// Payload for creating a listing (`POST /properties`).
///
/// Identical to [`Property`] minus the server-assigned `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: Location,
    pub features: Features,
    pub images: Vec<String>,
    pub agent: AgentContact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_tour: Option<String>,
    pub featured: bool,
    pub status: ListingStatus,
    pub listing_date: String,
}

/// Partial update for a listing (`PUT /properties/:id`).
///
/// Only the mutable marketing fields; unset fields are omitted from the
/// request body and left unchanged by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ListingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_tour: Option<String>,
}

impl Property {
    /// Short one-line summary used by CLI output.
    pub fn summary(&self) -> String {
        format!(
            "{} - {} ({}, {} bd / {} ba, {} sqft)",
            self.title,
            self.status,
            self.location.city,
            self.features.bedrooms,
            self.features.bathrooms,
            self.features.sqft
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "id": "1",
            "title": "Charming Family Home",
            "description": "Beautiful traditional home in a quiet neighborhood.",
            "price": 750_000.0,
            "location": {
                "address": "789 Oak Street",
                "city": "Pasadena",
                "state": "CA",
                "zipCode": "91101",
                "lat": 34.1478,
                "lng": -118.1445
            },
            "features": {
                "bedrooms": 3,
                "bathrooms": 2.0,
                "sqft": 2100,
                "yearBuilt": 1995,
                "propertyType": "House",
                "parking": 2
            },
            "images": ["https://example.com/p1.jpg"],
            "agent": {
                "id": "agent3",
                "name": "Emily Rodriguez",
                "phone": "(555) 456-7890",
                "email": "emily.rodriguez@realty.com"
            },
            "featured": false,
            "status": "For Sale",
            "listingDate": "2024-01-20"
        })
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let property: Property = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(property.id, "1");
        assert_eq!(property.location.zip_code, "91101");
        assert_eq!(property.features.property_type, PropertyType::House);
        assert_eq!(property.status, ListingStatus::ForSale);
        assert_eq!(property.virtual_tour, None);
    }

    #[test]
    fn test_serialize_round_trips_enum_strings() {
        let property: Property = serde_json::from_value(sample_json()).unwrap();
        let value = serde_json::to_value(&property).unwrap();
        assert_eq!(value["status"], "For Sale");
        assert_eq!(value["features"]["propertyType"], "House");
        assert_eq!(value["location"]["zipCode"], "91101");
    }

    #[test]
    fn test_listing_status_from_str_variants() {
        assert_eq!("for-sale".parse::<ListingStatus>(), Ok(ListingStatus::ForSale));
        assert_eq!("For Sale".parse::<ListingStatus>(), Ok(ListingStatus::ForSale));
        assert_eq!("for_rent".parse::<ListingStatus>(), Ok(ListingStatus::ForRent));
        assert_eq!("SOLD".parse::<ListingStatus>(), Ok(ListingStatus::Sold));
        assert!("unlisted".parse::<ListingStatus>().is_err());
    }

    #[test]
    fn test_property_type_from_str() {
        assert_eq!("condo".parse::<PropertyType>(), Ok(PropertyType::Condo));
        assert_eq!("House".parse::<PropertyType>(), Ok(PropertyType::House));
        assert!("castle".parse::<PropertyType>().is_err());
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let patch = PropertyPatch {
            price: Some(725_000.0),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, json!({ "price": 725_000.0 }));
    }
}
