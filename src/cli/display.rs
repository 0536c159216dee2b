//! Table output for listings, built on comfy-table.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};

use crate::cli::output::truncate;
use crate::domain::models::{ListingStatus, Property};
use crate::services::MapMarker;

/// Table formatter for CLI output.
pub struct TableFormatter {
    use_colors: bool,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: console::colors_enabled(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Format a list of properties as a table.
    pub fn format_properties(&self, properties: &[Property]) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("Price").add_attribute(Attribute::Bold),
            Cell::new("Beds").add_attribute(Attribute::Bold),
            Cell::new("Baths").add_attribute(Attribute::Bold),
            Cell::new("Sqft").add_attribute(Attribute::Bold),
            Cell::new("City").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

        for property in properties {
            let status_cell = if self.use_colors {
                Cell::new(property.status.to_string()).fg(status_color(property.status))
            } else {
                Cell::new(property.status.to_string())
            };
            table.add_row(vec![
                Cell::new(&property.id),
                Cell::new(truncate(&property.title, 40)),
                Cell::new(format_price(property.price, property.status)),
                Cell::new(property.features.bedrooms),
                Cell::new(property.features.bathrooms),
                Cell::new(property.features.sqft),
                Cell::new(&property.location.city),
                status_cell,
            ]);
        }

        table.to_string()
    }

    /// Format one property as a key/value detail table.
    pub fn format_property(&self, property: &Property) -> String {
        let mut table = self.create_base_table();
        let rows = [
            ("ID", property.id.clone()),
            ("Title", property.title.clone()),
            ("Price", format_price(property.price, property.status)),
            ("Status", property.status.to_string()),
            ("Type", property.features.property_type.to_string()),
            ("Bedrooms", property.features.bedrooms.to_string()),
            ("Bathrooms", property.features.bathrooms.to_string()),
            ("Square feet", property.features.sqft.to_string()),
            ("Year built", property.features.year_built.to_string()),
            ("Parking", property.features.parking.to_string()),
            (
                "Address",
                format!(
                    "{}, {}, {} {}",
                    property.location.address,
                    property.location.city,
                    property.location.state,
                    property.location.zip_code
                ),
            ),
            ("Listed", property.listing_date.clone()),
            (
                "Agent",
                format!("{} <{}>", property.agent.name, property.agent.email),
            ),
        ];
        for (label, value) in rows {
            table.add_row(vec![
                Cell::new(label).add_attribute(Attribute::Bold),
                Cell::new(value),
            ]);
        }
        table.to_string()
    }

    /// Format map markers as a table.
    pub fn format_markers(&self, markers: &[MapMarker]) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            Cell::new("").add_attribute(Attribute::Bold),
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Lat").add_attribute(Attribute::Bold),
            Cell::new("Lng").add_attribute(Attribute::Bold),
            Cell::new("Listing").add_attribute(Attribute::Bold),
        ]);
        for marker in markers {
            let badge = if marker.selected {
                format!("[{}]", marker.label)
            } else {
                marker.label.to_string()
            };
            table.add_row(vec![
                Cell::new(badge),
                Cell::new(&marker.property_id),
                Cell::new(format!("{:.4}", marker.latitude)),
                Cell::new(format!("{:.4}", marker.longitude)),
                Cell::new(truncate(&marker.summary, 50)),
            ]);
        }
        table.to_string()
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_price(price: f64, status: ListingStatus) -> String {
    let formatted = group_thousands(price);
    match status {
        ListingStatus::ForRent => format!("${formatted}/mo"),
        _ => format!("${formatted}"),
    }
}

/// `1234567.0` -> `"1,234,567"`.
fn group_thousands(value: f64) -> String {
    let whole = format!("{}", value.trunc() as i64);
    let mut out = String::with_capacity(whole.len() + whole.len() / 3);
    let digits: Vec<char> = whole.chars().collect();
    let offset = digits.len() % 3;
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 && *c != '-' {
            out.push(',');
        }
        out.push(*c);
    }
    out
}

fn status_color(status: ListingStatus) -> Color {
    match status {
        ListingStatus::ForSale => Color::Green,
        ListingStatus::ForRent => Color::Cyan,
        ListingStatus::Sold => Color::DarkGrey,
        ListingStatus::Pending => Color::Yellow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(1_250_000.0), "1,250,000");
        assert_eq!(group_thousands(3_500.0), "3,500");
        assert_eq!(group_thousands(950.0), "950");
    }

    #[test]
    fn test_rent_prices_show_monthly_suffix() {
        assert_eq!(format_price(3_500.0, ListingStatus::ForRent), "$3,500/mo");
        assert_eq!(format_price(750_000.0, ListingStatus::ForSale), "$750,000");
    }
}
