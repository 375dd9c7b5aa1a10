//! System endpoints: data source lifecycle and sample data management

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

use super::AgentMonitorClient;
use crate::error::{ClientError, ClientResult};

/// Sample data set size understood by the sample-data endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleDataSize {
    Small,
    Medium,
    Large,
}

impl SampleDataSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleDataSize::Small => "small",
            SampleDataSize::Medium => "medium",
            SampleDataSize::Large => "large",
        }
    }
}

impl fmt::Display for SampleDataSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleDataSize {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(SampleDataSize::Small),
            "medium" => Ok(SampleDataSize::Medium),
            "large" => Ok(SampleDataSize::Large),
            other => Err(ClientError::invalid_input(format!(
                "unknown sample data size '{}', expected small, medium or large",
                other
            ))),
        }
    }
}

fn size_body(size: Option<SampleDataSize>) -> Option<Value> {
    size.map(|size| json!({ "size": size }))
}

impl AgentMonitorClient {
    /// Initialize the server's data source
    ///
    /// POST /system/initialize
    pub fn initialize_system(&self) -> ClientResult<Value> {
        self.post(&["system", "initialize"], None)
    }

    /// Persist all data
    ///
    /// POST /system/save
    pub fn save_data(&self) -> ClientResult<Value> {
        self.post(&["system", "save"], None)
    }

    /// POST /system/cache/clear
    pub fn clear_cache(&self) -> ClientResult<Value> {
        self.post(&["system", "cache", "clear"], None)
    }

    /// Generate sample data
    ///
    /// POST /system/sample-data/generate
    ///
    /// Without a size no body is sent and the server picks its default.
    pub fn generate_sample_data(&self, size: Option<SampleDataSize>) -> ClientResult<Value> {
        self.post(
            &["system", "sample-data", "generate"],
            size_body(size).as_ref(),
        )
    }

    /// GET /system/sample-data/status
    pub fn get_sample_data_status(&self) -> ClientResult<Value> {
        self.get(&["system", "sample-data", "status"], Vec::new())
    }

    /// Generate and save all three static sample data sets
    ///
    /// POST /system/sample-data/generate-static
    pub fn generate_static_sample_data(&self) -> ClientResult<Value> {
        self.post(&["system", "sample-data", "generate-static"], None)
    }

    /// POST /system/sample-data/load-static
    pub fn load_static_sample_data(&self, size: Option<SampleDataSize>) -> ClientResult<Value> {
        self.post(
            &["system", "sample-data", "load-static"],
            size_body(size).as_ref(),
        )
    }

    /// Save the current data state as a static sample data set
    ///
    /// POST /system/sample-data/save-current
    pub fn save_current_as_static(&self, size: SampleDataSize) -> ClientResult<Value> {
        self.post(
            &["system", "sample-data", "save-current"],
            size_body(Some(size)).as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_body() {
        assert_eq!(size_body(None), None);
        assert_eq!(
            size_body(Some(SampleDataSize::Large)),
            Some(json!({ "size": "large" }))
        );
    }

    #[test]
    fn test_size_parsing() {
        assert_eq!("Medium".parse::<SampleDataSize>().unwrap(), SampleDataSize::Medium);
        assert!(matches!(
            "huge".parse::<SampleDataSize>(),
            Err(ClientError::InvalidInput(_))
        ));
    }
}
