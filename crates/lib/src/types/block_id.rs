use serde::{Deserialize, Serialize};

use crate::types::Felt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    Latest,
    Pending,
}

/// Block reference used by every trace and simulation call.
///
/// Wire form follows the node protocol: `{"block_hash": "0x.."}`,
/// `{"block_number": 12}` or a bare tag string such as `"latest"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockId {
    Hash {
        block_hash: Felt,
    },
    Number {
        block_number: u64,
    },
    Tag(BlockTag),
}

impl BlockId {
    pub fn hash(block_hash: Felt) -> Self {
        BlockId::Hash { block_hash }
    }

    pub fn number(block_number: u64) -> Self {
        BlockId::Number { block_number }
    }

    pub fn latest() -> Self {
        BlockId::Tag(BlockTag::Latest)
    }

    pub fn pending() -> Self {
        BlockId::Tag(BlockTag::Pending)
    }
}
