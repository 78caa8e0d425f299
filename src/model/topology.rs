use super::config::TopologyConfiguration;
use serde::{Deserialize, Serialize};

pub const TOPOLOGY_SCHEMA_VERSION: u32 = 1;

/// 一条拓扑记录（配置 + 元信息），即导入/导出的 JSON 文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topology {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub configuration: TopologyConfiguration,
}

impl Topology {
    pub fn new(name: impl Into<String>, configuration: TopologyConfiguration) -> Self {
        Self {
            schema_version: TOPOLOGY_SCHEMA_VERSION,
            name: name.into(),
            description: None,
            configuration,
        }
    }
}

fn default_schema_version() -> u32 {
    TOPOLOGY_SCHEMA_VERSION
}
