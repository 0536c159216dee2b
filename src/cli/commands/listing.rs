//! Authenticated listing mutations: create and update.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::context::AppContext;
use crate::cli::display::TableFormatter;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{NewProperty, Property, PropertyPatch};

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Path to a JSON file with the listing draft
    #[arg(short, long)]
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Listing id
    pub id: String,
    /// Path to a JSON file with the fields to change
    #[arg(short, long)]
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ListingOutput {
    pub property: Property,
    #[serde(skip)]
    pub message: String,
    #[serde(skip)]
    pub table: String,
}

impl CommandOutput for ListingOutput {
    fn to_human(&self) -> String {
        format!("{}\n{}", self.message, self.table)
    }
}

pub async fn execute_create(args: CreateArgs, ctx: &AppContext, json_mode: bool) -> Result<()> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("reading draft from {}", args.file.display()))?;
    let draft: NewProperty =
        serde_json::from_str(&raw).with_context(|| "parsing listing draft")?;

    let created = ctx.orchestrator.create_property(&draft).await?;
    let result = ListingOutput {
        message: format!("Created listing {}", created.id),
        table: TableFormatter::new().format_property(&created),
        property: created,
    };
    output(&result, json_mode);
    Ok(())
}

pub async fn execute_update(args: UpdateArgs, ctx: &AppContext, json_mode: bool) -> Result<()> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("reading patch from {}", args.file.display()))?;
    let patch: PropertyPatch =
        serde_json::from_str(&raw).with_context(|| "parsing listing patch")?;

    let updated = ctx.orchestrator.update_property(&args.id, &patch).await?;
    let result = ListingOutput {
        message: format!("Updated listing {}", updated.id),
        table: TableFormatter::new().format_property(&updated),
        property: updated,
    };
    output(&result, json_mode);
    Ok(())
}
