use serde::{Deserialize, Serialize};
use std::fmt;

/// The paginated, filterable listings the directory API exposes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Projects,
    Organizations,
    Members,
}

impl ResourceKind {
    /// Path segment under `/api/`.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Organizations => "organizations",
            Self::Members => "members",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
