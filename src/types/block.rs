//! The named sections of a forecast response. Requests can exclude blocks to
//! reduce response size and cost.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    Alerts,
    Currently,
    Daily,
    Flags,
    Hourly,
    Minutely,
}

impl Block {
    pub fn as_str(&self) -> &'static str {
        match self {
            Block::Alerts => "alerts",
            Block::Currently => "currently",
            Block::Daily => "daily",
            Block::Flags => "flags",
            Block::Hourly => "hourly",
            Block::Minutely => "minutely",
        }
    }

    pub const fn all() -> &'static [Block] {
        &[
            Block::Alerts,
            Block::Currently,
            Block::Daily,
            Block::Flags,
            Block::Hourly,
            Block::Minutely,
        ]
    }

    /// Every block except `keep`, for requests that want a single block.
    pub fn all_except(keep: Block) -> Vec<Block> {
        Self::all()
            .iter()
            .copied()
            .filter(|block| *block != keep)
            .collect()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
