use serde::{Deserialize, Serialize};

/// Planner-independent description of a configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigSpecification {}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OverhaulBlock {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alias_names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_alias_names_skipped_when_empty() {
        let block = OverhaulBlock {
            name: "nuclearcraft:water_heatsink".to_string(),
            alias_names: vec![],
        };
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({ "name": "nuclearcraft:water_heatsink" })
        );
    }

    #[test]
    fn test_alias_names_default_on_read() {
        let block: OverhaulBlock = serde_json::from_value(json!({ "name": "casing" })).unwrap();
        assert!(block.alias_names.is_empty());

        let block: OverhaulBlock =
            serde_json::from_value(json!({ "name": "casing", "alias_names": ["glass"] })).unwrap();
        assert_eq!(block.alias_names, vec!["glass".to_string()]);
    }
}
