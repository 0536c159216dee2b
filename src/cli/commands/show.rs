//! Listing detail command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::context::AppContext;
use crate::cli::display::TableFormatter;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Property;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Listing id
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub property: Property,
    #[serde(skip)]
    pub table: String,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        format!("{}\n\n{}", self.table, self.property.description)
    }
}

pub async fn execute(args: ShowArgs, ctx: &AppContext, json_mode: bool) -> Result<()> {
    let property = ctx.orchestrator.property(&args.id).await?;
    let result = ShowOutput {
        table: TableFormatter::new().format_property(&property),
        property,
    };
    output(&result, json_mode);
    Ok(())
}
