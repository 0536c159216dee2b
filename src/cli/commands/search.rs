//! Search command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::context::AppContext;
use crate::cli::display::TableFormatter;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{ListingStatus, Property, PropertyType, SearchFilters};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Minimum price
    #[arg(long, default_value_t = 0.0)]
    pub min_price: f64,
    /// Maximum price
    #[arg(long, default_value_t = 5_000_000.0)]
    pub max_price: f64,
    /// Property type (house, apartment, condo, townhouse); repeatable
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub property_type: Vec<PropertyType>,
    /// Minimum number of bedrooms
    #[arg(long)]
    pub bedrooms: Option<u32>,
    /// Minimum number of bathrooms
    #[arg(long)]
    pub bathrooms: Option<f32>,
    /// Minimum square footage
    #[arg(long)]
    pub min_sqft: Option<u32>,
    /// Maximum square footage
    #[arg(long)]
    pub max_sqft: Option<u32>,
    /// Location term, matched against address, city, state, and zip
    #[arg(short, long, default_value = "")]
    pub location: String,
    /// Listing status (for-sale, for-rent, sold, pending); repeatable
    #[arg(short, long)]
    pub status: Vec<ListingStatus>,
    /// Bypass the cache and fetch live data
    #[arg(long)]
    pub fresh: bool,
}

impl SearchArgs {
    pub fn to_filters(&self) -> SearchFilters {
        SearchFilters {
            price_range: (self.min_price, self.max_price),
            property_type: self.property_type.clone(),
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            min_sqft: self.min_sqft,
            max_sqft: self.max_sqft,
            location: self.location.clone(),
            status: self.status.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchOutputRow {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub sqft: u32,
    pub city: String,
    pub status: String,
}

impl From<&Property> for SearchOutputRow {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.clone(),
            title: property.title.clone(),
            price: property.price,
            bedrooms: property.features.bedrooms,
            bathrooms: property.features.bathrooms,
            sqft: property.features.sqft,
            city: property.location.city.clone(),
            status: property.status.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub properties: Vec<SearchOutputRow>,
    pub total: usize,
    #[serde(skip)]
    pub table: String,
}

impl CommandOutput for SearchOutput {
    fn to_human(&self) -> String {
        if self.properties.is_empty() {
            return "No listings match these filters.".to_string();
        }
        format!("{}\n{} listing(s)", self.table, self.total)
    }
}

pub async fn execute(args: SearchArgs, ctx: &AppContext, json_mode: bool) -> Result<()> {
    let filters = args.to_filters();
    if args.fresh {
        ctx.orchestrator.search_fresh(&filters).await?;
    } else {
        ctx.orchestrator.search(&filters).await?;
    }

    let snapshot = ctx.orchestrator.snapshot();
    let result = SearchOutput {
        properties: snapshot.properties.iter().map(Into::into).collect(),
        total: snapshot.properties.len(),
        table: TableFormatter::new().format_properties(&snapshot.properties),
    };
    output(&result, json_mode);
    Ok(())
}
