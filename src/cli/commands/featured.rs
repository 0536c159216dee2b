//! Featured listings command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::commands::search::SearchOutputRow;
use crate::cli::context::AppContext;
use crate::cli::display::TableFormatter;
use crate::cli::output::{output, CommandOutput};

#[derive(Args, Debug)]
pub struct FeaturedArgs {}

#[derive(Debug, Serialize)]
pub struct FeaturedOutput {
    pub properties: Vec<SearchOutputRow>,
    pub total: usize,
    #[serde(skip)]
    pub table: String,
}

impl CommandOutput for FeaturedOutput {
    fn to_human(&self) -> String {
        if self.properties.is_empty() {
            return "No featured listings right now.".to_string();
        }
        format!("{}\n{} featured listing(s)", self.table, self.total)
    }
}

pub async fn execute(_args: FeaturedArgs, ctx: &AppContext, json_mode: bool) -> Result<()> {
    let listings = ctx.orchestrator.featured().await?;
    let result = FeaturedOutput {
        properties: listings.iter().map(Into::into).collect(),
        total: listings.len(),
        table: TableFormatter::new().format_properties(&listings),
    };
    output(&result, json_mode);
    Ok(())
}
