//! Map markers command: search, then plot the results.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::commands::search::SearchArgs;
use crate::cli::context::AppContext;
use crate::cli::display::TableFormatter;
use crate::cli::output::{output, CommandOutput};
use crate::services::MapViewState;

#[derive(Args, Debug)]
pub struct MapArgs {
    #[command(flatten)]
    pub search: SearchArgs,
    /// Highlight this listing id
    #[arg(long)]
    pub select: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MarkerOutput {
    pub property_id: String,
    pub lat: f64,
    pub lng: f64,
    pub label: char,
    pub selected: bool,
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct MapOutput {
    pub markers: Vec<MarkerOutput>,
    pub center: (f64, f64),
    pub zoom: u8,
    #[serde(skip)]
    pub table: String,
}

impl CommandOutput for MapOutput {
    fn to_human(&self) -> String {
        if self.markers.is_empty() {
            return format!(
                "No listings to plot; default viewport ({:.4}, {:.4})",
                self.center.0, self.center.1
            );
        }
        format!(
            "{}\nCenter ({:.4}, {:.4}), zoom {}",
            self.table, self.center.0, self.center.1, self.zoom
        )
    }
}

pub async fn execute(args: MapArgs, ctx: &AppContext, json_mode: bool) -> Result<()> {
    let filters = args.search.to_filters();
    ctx.orchestrator.search(&filters).await?;
    let snapshot = ctx.orchestrator.snapshot();

    let view = MapViewState::from_properties(&snapshot.properties, args.select.as_deref())?;
    let result = MapOutput {
        table: TableFormatter::new().format_markers(&view.markers),
        markers: view
            .markers
            .into_iter()
            .map(|m| MarkerOutput {
                property_id: m.property_id,
                lat: m.latitude,
                lng: m.longitude,
                label: m.label,
                selected: m.selected,
                summary: m.summary,
            })
            .collect(),
        center: view.center,
        zoom: view.zoom,
    };
    output(&result, json_mode);
    Ok(())
}
