//! Sandbox configuration, loaded from a JSON object
//!
//! Every field has a default, so `{}` (or no config at all) gives the stock
//! 800x600 sandbox wired to `#selection`, `#start` and `#stop`.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub background: String,
    pub block_color: String,
    pub variable_color: String,
    pub steps_per_second: u32,
    pub dom: DomIds,
}

/// Element ids the browser host binds to
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomIds {
    pub selection: String,
    pub start: String,
    pub stop: String,
    /// Canvas parent; `None` appends to `<body>`
    pub container: Option<String>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            background: "#eeeee4".to_string(),
            block_color: "#4a4e69".to_string(),
            variable_color: "#c9184a".to_string(),
            steps_per_second: 60,
            dom: DomIds::default(),
        }
    }
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            selection: "selection".to_string(),
            start: "start".to_string(),
            stop: "stop".to_string(),
            container: None,
        }
    }
}

impl SandboxConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: SandboxConfig = serde_json::from_str(json)?;
        config.steps_per_second = config.steps_per_second.max(1);
        Ok(config)
    }

    /// Fixed physics timestep in seconds
    pub fn timestep(&self) -> f32 {
        1.0 / self.steps_per_second.max(1) as f32
    }

    /// Step loop period in milliseconds
    pub fn step_interval_ms(&self) -> i32 {
        (1000 / self.steps_per_second.max(1)) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = SandboxConfig::from_json("{}").unwrap();
        assert_eq!(config, SandboxConfig::default());
        assert_eq!(config.dom.selection, "selection");
        assert_eq!(config.background, "#eeeee4");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            SandboxConfig::from_json(r#"{"steps_per_second": 120, "dom": {"start": "go"}}"#)
                .unwrap();
        assert_eq!(config.steps_per_second, 120);
        assert!((config.timestep() - 1.0 / 120.0).abs() < 1e-6);
        assert_eq!(config.dom.start, "go");
        assert_eq!(config.dom.stop, "stop");
        assert_eq!(config.canvas_width, 800);
    }

    #[test]
    fn zero_rate_is_clamped() {
        let config = SandboxConfig::from_json(r#"{"steps_per_second": 0}"#).unwrap();
        assert_eq!(config.steps_per_second, 1);
        assert_eq!(config.step_interval_ms(), 1000);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SandboxConfig::from_json("{ nope").is_err());
    }
}
