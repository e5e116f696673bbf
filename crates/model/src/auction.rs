use serde::{Deserialize, Serialize};

/// Resources a workload claims from the cell it gets placed on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub memory_mb: i32,
    pub disk_mb: i32,
    pub max_pids: i32,
}

/// Constraints narrowing down the set of cells a workload may be placed on.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlacementConstraint {
    #[serde(rename = "rootfs")]
    pub root_fs: String,
    #[serde(default)]
    pub volume_drivers: Vec<String>,
    #[serde(default)]
    pub placement_tags: Vec<String>,
}

/// A request to run a placement auction for a one shot task.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TaskStartRequest {
    pub task_guid: String,
    pub domain: String,
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(flatten)]
    pub placement: PlacementConstraint,
}

/// A request to run placement auctions for instances of a long running
/// process. `indices` lists the instance indices that need a home; the
/// resource and placement data applies to every one of them.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LrpStartRequest {
    pub process_guid: String,
    pub domain: String,
    #[serde(default)]
    pub indices: Vec<u32>,
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(flatten)]
    pub placement: PlacementConstraint,
}
