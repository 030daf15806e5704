//! Block references used as request parameters.

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Felt;

/// A symbolic block reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    Latest,
    Pending,
}

/// Identifies a block by hash, number or tag.
///
/// Wire forms: `{"block_hash": "0x…"}`, `{"block_number": 42}`, `"latest"`,
/// `"pending"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockId {
    Hash(Felt),
    Number(u64),
    Tag(BlockTag),
}

impl BlockId {
    pub fn latest() -> Self {
        Self::Tag(BlockTag::Latest)
    }

    pub fn pending() -> Self {
        Self::Tag(BlockTag::Pending)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash(hash) => write!(f, "{hash:#x}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Tag(BlockTag::Latest) => write!(f, "latest"),
            Self::Tag(BlockTag::Pending) => write!(f, "pending"),
        }
    }
}

impl Serialize for BlockId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Hash(hash) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("block_hash", hash)?;
                map.end()
            }
            Self::Number(n) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("block_number", n)?;
                map.end()
            }
            Self::Tag(tag) => tag.serialize(serializer),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BlockIdRepr {
    Tag(BlockTag),
    Hash { block_hash: Felt },
    Number { block_number: u64 },
}

impl<'de> Deserialize<'de> for BlockId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match BlockIdRepr::deserialize(deserializer)? {
            BlockIdRepr::Tag(tag) => Self::Tag(tag),
            BlockIdRepr::Hash { block_hash } => Self::Hash(block_hash),
            BlockIdRepr::Number { block_number } => Self::Number(block_number),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_forms() {
        assert_eq!(
            serde_json::to_value(BlockId::Hash(Felt::from(0xabcu64))).unwrap(),
            json!({"block_hash": "0xabc"})
        );
        assert_eq!(
            serde_json::to_value(BlockId::Number(42)).unwrap(),
            json!({"block_number": 42})
        );
        assert_eq!(serde_json::to_value(BlockId::latest()).unwrap(), json!("latest"));
        assert_eq!(serde_json::to_value(BlockId::pending()).unwrap(), json!("pending"));
    }

    #[test]
    fn parses_all_forms() {
        let hash: BlockId = serde_json::from_value(json!({"block_hash": "0x1f"})).unwrap();
        assert_eq!(hash, BlockId::Hash(Felt::from(0x1fu64)));
        let number: BlockId = serde_json::from_value(json!({"block_number": 7})).unwrap();
        assert_eq!(number, BlockId::Number(7));
        let tag: BlockId = serde_json::from_value(json!("pending")).unwrap();
        assert_eq!(tag, BlockId::pending());
        assert!(serde_json::from_value::<BlockId>(json!("finalized")).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(BlockId::Number(3).to_string(), "3");
        assert_eq!(BlockId::latest().to_string(), "latest");
    }
}
