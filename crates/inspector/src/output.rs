//! Rendering of decoded files for the terminal.

use anyhow::{bail, Context, Result};
use nc_sim::serialization::ncpf::simplelibrary;
use nc_sim::NcpfFile;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Configuration name, version and block counts
    #[default]
    Summary,
    /// Raw SimpleLibrary documents as JSON
    Json,
    /// Typed configuration model
    Debug,
}

pub fn render(data: &[u8], format: Format, document: Option<usize>, pretty: bool) -> Result<String> {
    match format {
        Format::Json => {
            let documents = simplelibrary::decode_all(data).context("decoding documents")?;
            tracing::debug!("{} documents decoded", documents.len());
            render_json(documents, document, pretty)
        }
        Format::Summary => {
            let file = NcpfFile::parse(data).context("parsing planner file")?;
            Ok(render_summary(&file))
        }
        Format::Debug => {
            let file = NcpfFile::parse(data).context("parsing planner file")?;
            Ok(format!("{:#?}", file.configuration))
        }
    }
}

fn render_json(mut documents: Vec<Value>, document: Option<usize>, pretty: bool) -> Result<String> {
    let value = match document {
        Some(index) if index < documents.len() => documents.swap_remove(index),
        Some(index) => bail!(
            "document {} requested but the file has {}",
            index,
            documents.len()
        ),
        None => Value::Array(documents),
    };
    let text = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

pub fn render_summary(file: &NcpfFile) -> String {
    let config = &file.configuration;
    let sfr = &config.overhaul.fission_sfr;
    let summary = sfr.summary();

    let mut lines = vec![
        format!("Name:     {}", config.name),
        format!(
            "Version:  {} (underhaul {})",
            config.version, config.underhaul_version
        ),
        format!("Addon:    {}", if config.addon { "yes" } else { "no" }),
    ];
    if let (Some(min), Some(max)) = (sfr.min_size, sfr.max_size) {
        lines.push(format!("Size:     {}..={}", min, max));
    }
    lines.push(format!("Blocks:   {}", summary.total));
    for (label, count) in [
        ("fuel cells", summary.fuel_cells),
        ("moderators", summary.moderators),
        ("reflectors", summary.reflectors),
        ("heat sinks", summary.heat_sinks),
        ("sources", summary.sources),
        ("coolant vents", summary.coolant_vents),
        ("casings", summary.casings),
        ("conductors", summary.conductors),
        ("controllers", summary.controllers),
    ] {
        if count > 0 {
            lines.push(format!("  {:<14}{}", label, count));
        }
    }
    lines.push(format!("Recipes:  {}", summary.recipes));
    lines.push(format!("Designs:  {}", file.designs.len()));
    lines.join("\n")
}
