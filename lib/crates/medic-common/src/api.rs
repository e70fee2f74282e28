//! Request and response bodies shared by the REST and JSON-RPC surfaces.
//!
//! Both transports deserialize the same request types and serialize the same
//! response types, so a caller sees identical shapes whichever it uses.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{FixOutcome, Issue, PlatformInfo};

/// Body of `POST /diagnose` and params of `mcp.diagnose_issues`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnoseRequest {
    /// Keep only issues in these categories. Absent or empty keeps all.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

/// Result of a diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnoseResponse {
    pub issues: Vec<Issue>,
    pub count: usize,
}

impl DiagnoseResponse {
    #[must_use]
    pub fn new(issues: Vec<Issue>) -> Self {
        Self {
            count: issues.len(),
            issues,
        }
    }
}

/// Body of `POST /fix` and params of `mcp.fix_issues`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixRequest {
    /// Fix only issues with these ids. Absent or empty fixes all.
    #[serde(default)]
    pub issue_ids: Option<Vec<String>>,
    /// When `false`, issues are selected but no remediation runs.
    #[serde(default = "default_auto_fix")]
    pub auto_fix: bool,
}

impl Default for FixRequest {
    fn default() -> Self {
        Self {
            issue_ids: None,
            auto_fix: default_auto_fix(),
        }
    }
}

fn default_auto_fix() -> bool {
    true
}

/// Result of a fix run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixResponse {
    pub status: String,
    /// Number of issues selected for fixing, whether or not fixes ran.
    pub issues_fixed: usize,
    /// Issues selected for fixing, after id filtering.
    pub issues: Vec<Issue>,
    pub outcomes: Vec<FixOutcome>,
}

impl FixResponse {
    #[must_use]
    pub fn new(issues: Vec<Issue>, outcomes: Vec<FixOutcome>) -> Self {
        Self {
            status: "success".to_string(),
            issues_fixed: issues.len(),
            issues,
            outcomes,
        }
    }
}

/// Body of `POST /check` and params of `mcp.check_environment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckRequest {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_true")]
    pub include_software: bool,
    #[serde(default = "default_true")]
    pub include_network: bool,
    #[serde(default = "default_true")]
    pub include_security: bool,
}

impl Default for CheckRequest {
    fn default() -> Self {
        Self {
            verbose: false,
            include_software: true,
            include_network: true,
            include_security: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// One operation advertised to other agents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Capability {
    pub name: String,
    pub description: String,
    /// Parameter name to type name.
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl Capability {
    fn new(name: &str, description: &str, parameters: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            parameters: parameters
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

/// Operations this agent exposes over REST and JSON-RPC.
#[must_use]
pub fn capabilities() -> Vec<Capability> {
    vec![
        Capability::new(
            "get_dev_info",
            "Get development information: system specs and development tools",
            &[],
        ),
        Capability::new(
            "check_environment",
            "Check and analyze computer environment",
            &[
                ("verbose", "bool"),
                ("include_software", "bool"),
                ("include_network", "bool"),
                ("include_security", "bool"),
            ],
        ),
        Capability::new(
            "check_updates",
            "Check for system and software updates",
            &[],
        ),
        Capability::new("diagnose_issues", "Detect system issues", &[("categories", "list")]),
        Capability::new(
            "fix_issues",
            "Fix detected issues",
            &[("auto_fix", "bool"), ("issue_ids", "list")],
        ),
    ]
}

/// Result of `mcp.get_status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub platform: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusResponse {
    #[must_use]
    pub fn active(platform: &PlatformInfo) -> Self {
        Self {
            status: "active".to_string(),
            platform: platform.os_family.to_string(),
            version: platform.version.clone(),
            timestamp: Utc::now(),
        }
    }
}

/// Discovery document served at `GET /agent-info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentInfo {
    pub agent_id: String,
    pub name: String,
    pub version: String,
    pub capabilities: Vec<Capability>,
    pub endpoints: BTreeMap<String, String>,
    pub status: String,
}

impl AgentInfo {
    /// Build the discovery document for a server reachable at `base_url`.
    #[must_use]
    pub fn new(version: &str, base_url: &str) -> Self {
        let mut endpoints = BTreeMap::new();
        endpoints.insert("rest".to_string(), base_url.to_string());
        endpoints.insert("mcp".to_string(), format!("{base_url}/mcp"));
        Self {
            agent_id: "medic".to_string(),
            name: "medic host agent".to_string(),
            version: version.to_string(),
            capabilities: capabilities(),
            endpoints,
            status: "active".to_string(),
        }
    }
}
