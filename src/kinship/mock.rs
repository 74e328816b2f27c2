//! kinship::mock
//!
//! A deterministic namer for tests: echoes the walk instead of
//! translating it, so assertions can check the path itself.

use crate::numbering::Step;

use super::traits::KinshipNamer;

/// Joins step names with spaces (`"mother father"`); the empty walk
/// yields the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathEcho;

impl KinshipNamer for PathEcho {
    fn locale(&self) -> &'static str {
        "echo"
    }

    fn name_for_path(&self, path: &[Step]) -> String {
        path.iter()
            .map(Step::name)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
