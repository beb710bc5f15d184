use std::str::FromStr;
use serde::Deserialize;

/// Which collection the readiness counts resolve prerequisites against.
///
/// - `Subset`: the filtered working set itself (default). A prerequisite
///   that was filtered out, e.g. one from another project, cannot be found
///   and the dependent counts as blocked. This matches the long-standing
///   dashboard numbers.
/// - `All`: every task in the snapshot, completed ones included, so
///   cross-project prerequisites resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockingScope {
    Subset,
    All,
}

impl Default for BlockingScope {
    fn default() -> Self {
        BlockingScope::Subset
    }
}

impl FromStr for BlockingScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "subset" => Ok(BlockingScope::Subset),
            "all" => Ok(BlockingScope::All),
            other => Err(format!(
                "invalid blocking_scope: {other} (expected \"subset\" or \"all\")"
            )),
        }
    }
}
