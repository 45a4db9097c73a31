use firesight_layout::WordLayoutConfig;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Column names read from each incident record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMapping {
    pub county: String,
    pub acres_burned: String,
    pub injuries: String,
    pub fatalities: String,
    pub personnel: String,
    pub year: String,
    pub incident_name: String,
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            county: "Counties".to_string(),
            acres_burned: "AcresBurned".to_string(),
            injuries: "Injuries".to_string(),
            fatalities: "Fatalities".to_string(),
            personnel: "PersonnelInvolved".to_string(),
            year: "Year".to_string(),
            incident_name: "IncidentName".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub fields: FieldMapping,
    pub word_cloud: WordLayoutConfig,
    /// Hide the group of records without a county in the bar chart
    pub drop_empty_keys: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fields: FieldMapping::default(),
            word_cloud: WordLayoutConfig::default(),
            drop_empty_keys: true,
        }
    }
}

impl PipelineConfig {
    /// Parses a JSON config. Omitted keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ChartError> {
        serde_json::from_str(json).map_err(|err| ChartError::InvalidConfig(err.to_string()))
    }
}
