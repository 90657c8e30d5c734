//! Typed view of the NCPF 11 configuration document.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Formatter};

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Ncpf11 {
    pub addon: bool,
    pub name: String,
    pub version: String,
    pub underhaul_version: String,

    pub overhaul: OverhaulConfiguration,
}

/// Square RGBA texture: side length followed by `side * side` pixels.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct TextureInfo(pub Vec<i32>);

impl TextureInfo {
    /// Side length when the pixel count matches it.
    pub fn size(&self) -> Option<usize> {
        let side = *self.0.first()?;
        if side <= 0 {
            return None;
        }
        let side = side as usize;
        let expected = side.checked_mul(side).and_then(|n| n.checked_add(1))?;
        (self.0.len() == expected).then_some(side)
    }
}

impl Debug for TextureInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.size() {
            Some(size) => write!(f, "[{0}x{0} texture]", size),
            None => write!(f, "[invalid texture]"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OverhaulConfiguration {
    #[serde(rename = "fissionSFR")]
    pub fission_sfr: OverhaulSfrConfiguration,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OverhaulSfrConfiguration {
    #[serde(default)]
    pub min_size: Option<i32>,
    #[serde(default)]
    pub max_size: Option<i32>,
    #[serde(default)]
    pub neutron_reach: Option<i32>,
    #[serde(default)]
    pub cooling_efficiency_leniency: Option<i32>,
    #[serde(default)]
    pub sparsity_penalty_mult: Option<f32>,
    #[serde(default)]
    pub sparsity_penalty_threshold: Option<f32>,

    pub blocks: Vec<OverhaulSfrBlock>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OverhaulSfrBlock {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub legacy_names: Vec<String>,
    #[serde(default)]
    pub texture: Option<TextureInfo>,

    #[serde(default)]
    pub cluster: bool,
    #[serde(default)]
    pub create_cluster: bool,
    #[serde(default)]
    pub conductor: bool,
    #[serde(default)]
    pub functional: bool,
    #[serde(default, rename = "blockLOS")]
    pub block_los: bool,
    #[serde(default)]
    pub casing: bool,
    #[serde(default)]
    pub casing_edge: bool,
    #[serde(default)]
    pub controller: bool,

    #[serde(flatten)]
    pub stats: OverhaulStats,
    #[serde(default)]
    pub recipes: Vec<OverhaulSfrRecipe>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OverhaulSfrRecipe {
    pub input: OverhaulRecipeIo,
    pub output: OverhaulRecipeIo,
    #[serde(flatten)]
    pub stats: OverhaulStats,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OverhaulRecipeIo {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub legacy_names: Vec<String>,
    #[serde(default)]
    pub texture: Option<TextureInfo>,
    #[serde(default)]
    pub rate: i32,
}

/// Role-specific stats; a block or recipe carries the cells for the roles it has.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct OverhaulStats {
    #[serde(default)]
    pub coolant_vent: Option<OverhaulCoolantVent>,
    #[serde(default)]
    pub fuel_cell: Option<StatsCell<OverhaulFuelCell>>,
    #[serde(default)]
    pub reflector: Option<StatsCell<OverhaulReflector>>,
    #[serde(default)]
    pub moderator: Option<StatsCell<OverhaulModerator>>,
    #[serde(default, rename = "heatsink")]
    pub heat_sink: Option<StatsCell<OverhaulHeatSink>>,
    #[serde(default)]
    pub source: Option<StatsCell<OverhaulSource>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OverhaulCoolantVent {
    #[serde(default)]
    pub out_texture: Option<TextureInfo>,
    pub out_display_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StatsCell<T> {
    #[serde(default)]
    pub has_base_stats: Option<bool>,
    #[serde(flatten)]
    pub stats: Option<T>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OverhaulFuelCell {
    pub efficiency: f32,
    pub heat: i32,
    pub criticality: i32,
    #[serde(default)]
    pub self_priming: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OverhaulReflector {
    pub efficiency: f32,
    pub reflectivity: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OverhaulModerator {
    pub flux: i32,
    pub efficiency: f32,
    #[serde(default)]
    pub active: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OverhaulHeatSink {
    pub cooling: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OverhaulSource {
    pub cooling: f32,
}

/// Per-role block counts of a fission SFR configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
    pub total: usize,
    pub fuel_cells: usize,
    pub moderators: usize,
    pub reflectors: usize,
    pub heat_sinks: usize,
    pub sources: usize,
    pub coolant_vents: usize,
    pub casings: usize,
    pub conductors: usize,
    pub controllers: usize,
    pub recipes: usize,
}

impl OverhaulSfrConfiguration {
    pub fn summary(&self) -> BlockSummary {
        let mut summary = BlockSummary {
            total: self.blocks.len(),
            ..Default::default()
        };
        for block in &self.blocks {
            let stats = &block.stats;
            summary.fuel_cells += stats.fuel_cell.is_some() as usize;
            summary.moderators += stats.moderator.is_some() as usize;
            summary.reflectors += stats.reflector.is_some() as usize;
            summary.heat_sinks += stats.heat_sink.is_some() as usize;
            summary.sources += stats.source.is_some() as usize;
            summary.coolant_vents += stats.coolant_vent.is_some() as usize;
            summary.casings += block.casing as usize;
            summary.conductors += block.conductor as usize;
            summary.controllers += block.controller as usize;
            summary.recipes += block.recipes.len();
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::ncpf::fixtures::sample_configuration;
    use serde_json::json;

    #[test]
    fn test_texture_debug() {
        assert_eq!(format!("{:?}", TextureInfo(vec![2, 0, 0, 0, 0])), "[2x2 texture]");
        assert_eq!(format!("{:?}", TextureInfo(vec![2, 0, 0])), "[invalid texture]");
        assert_eq!(format!("{:?}", TextureInfo(vec![0])), "[invalid texture]");
        assert_eq!(format!("{:?}", TextureInfo(vec![])), "[invalid texture]");
    }

    #[test]
    fn test_texture_huge_side_is_invalid() {
        assert_eq!(TextureInfo(vec![i32::MAX, 0]).size(), None);
        assert_eq!(TextureInfo(vec![65536]).size(), None);
    }

    #[test]
    fn test_deserialize_configuration() {
        let config: Ncpf11 = serde_json::from_value(sample_configuration()).unwrap();
        assert_eq!(config.underhaul_version, "2.18o");
        let sfr = &config.overhaul.fission_sfr;
        assert_eq!(sfr.max_size, Some(24));
        assert_eq!(sfr.cooling_efficiency_leniency, None);
        assert_eq!(sfr.sparsity_penalty_mult, Some(0.5));

        let cell = &sfr.blocks[0];
        assert!(cell.functional);
        assert_eq!(cell.texture.as_ref().and_then(TextureInfo::size), Some(1));
        let cell_stats = cell.stats.fuel_cell.as_ref().unwrap();
        assert_eq!(cell_stats.has_base_stats, Some(false));

        let recipe = &cell.recipes[0];
        assert_eq!(recipe.input.rate, 0);
        assert_eq!(recipe.output.rate, 1);
        let fuel = recipe
            .stats
            .fuel_cell
            .as_ref()
            .and_then(|c| c.stats.as_ref())
            .unwrap();
        assert_eq!(fuel.heat, 50);
        assert_eq!(fuel.criticality, 102);
        assert!(!fuel.self_priming);

        let moderator = sfr.blocks[1].stats.moderator.as_ref().unwrap();
        assert_eq!(moderator.stats.as_ref().map(|m| m.flux), Some(10));

        let sink = sfr.blocks[2].stats.heat_sink.as_ref().unwrap();
        assert_eq!(sink.stats.as_ref().map(|s| s.cooling), Some(55));
    }

    #[test]
    fn test_summary_counts_roles() {
        let config: Ncpf11 = serde_json::from_value(sample_configuration()).unwrap();
        let summary = config.overhaul.fission_sfr.summary();
        assert_eq!(
            summary,
            BlockSummary {
                total: 6,
                fuel_cells: 1,
                moderators: 1,
                reflectors: 0,
                heat_sinks: 1,
                sources: 0,
                coolant_vents: 1,
                casings: 3,
                conductors: 0,
                controllers: 1,
                recipes: 1,
            }
        );
    }

    #[test]
    fn test_missing_blocks_is_an_error() {
        let value = json!({
            "addon": false, "name": "x", "version": "1", "underhaulVersion": "1",
            "overhaul": { "fissionSFR": {} }
        });
        assert!(serde_json::from_value::<Ncpf11>(value).is_err());
    }
}
