//! Dynamic document blocks and the field records they render from.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::context::LineItem;
use crate::domain::types::TypeConstraintError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    /// Company letterhead with document number and date.
    #[serde(rename = "header")]
    Header,
    #[serde(rename = "cliente")]
    Client,
    #[serde(rename = "proprieta")]
    Property,
    #[serde(rename = "totali")]
    Totals,
    /// Proposal line items.
    #[serde(rename = "serviziTabella")]
    ServicesTable,
}

impl BlockType {
    pub const ALL: [BlockType; 5] = [
        BlockType::Header,
        BlockType::Client,
        BlockType::Property,
        BlockType::Totals,
        BlockType::ServicesTable,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Header => "header",
            BlockType::Client => "cliente",
            BlockType::Property => "proprieta",
            BlockType::Totals => "totali",
            BlockType::ServicesTable => "serviziTabella",
        }
    }
}

impl Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|block| block.as_str() == s)
            .ok_or_else(|| TypeConstraintError::UnknownBlockType(s.to_string()))
    }
}

/// A single field of a block record.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BlockValue {
    Text(String),
    Flag(bool),
    Items(Vec<LineItem>),
}

impl BlockValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            BlockValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<String> for BlockValue {
    fn from(value: String) -> Self {
        BlockValue::Text(value)
    }
}

impl From<bool> for BlockValue {
    fn from(value: bool) -> Self {
        BlockValue::Flag(value)
    }
}

/// Field name to value, pre-formatted for display.
pub type BlockData = BTreeMap<&'static str, BlockValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_names_round_trip() {
        for block in BlockType::ALL {
            assert_eq!(block.as_str().parse::<BlockType>().unwrap(), block);
        }
        assert!("footer".parse::<BlockType>().is_err());
    }

    #[test]
    fn block_value_serializes_untagged() {
        let mut data = BlockData::new();
        data.insert("hasItems", BlockValue::Flag(false));
        data.insert("items", BlockValue::Items(Vec::new()));
        data.insert("totale", BlockValue::Text("0,00 €".to_string()));
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"hasItems": false, "items": [], "totale": "0,00 €"})
        );
    }
}
