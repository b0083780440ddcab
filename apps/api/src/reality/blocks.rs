//! Content blocks: the output unit of the reality engine.
//!
//! Internally a block is a proper sum type (`BlockBody`) with typed payloads for the
//! two card kinds. At the boundary it serializes to the flat document-editor form
//! `{ id, type, content, properties?, parentId, children }`, where card payloads are
//! JSON-encoded into `content`. `Deserialize` goes back through the same flat form.

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Typed payloads
// ────────────────────────────────────────────────────────────────────────────

/// One row of a side-by-side comparison card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub label: String,
    pub value_a: String,
    pub value_b: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub highlight: bool,
}

impl Metric {
    pub fn new(label: &str, value_a: impl Into<String>, value_b: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value_a: value_a.into(),
            value_b: value_b.into(),
            highlight: false,
        }
    }

    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonCard {
    pub company_a: String,
    pub company_b: String,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictCard {
    pub winner: String,
    pub financial_diff: String,
    pub growth_winner: String,
    pub wlb_winner: String,
    pub network_sentiment: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Block sum type
// ────────────────────────────────────────────────────────────────────────────

/// Text variants carry markdown-lite content (`**bold**` is the only markup).
#[derive(Debug, Clone, PartialEq)]
pub enum BlockBody {
    Heading1(String),
    Heading2(String),
    Heading3(String),
    Paragraph(String),
    Quote(String),
    Callout(String),
    Todo { text: String, checked: bool },
    Divider,
    ComparisonCard(ComparisonCard),
    VerdictCard(VerdictCard),
}

impl BlockBody {
    /// Wire `type` tag.
    pub fn type_tag(&self) -> &'static str {
        match self {
            BlockBody::Heading1(_) => "heading-1",
            BlockBody::Heading2(_) => "heading-2",
            BlockBody::Heading3(_) => "heading-3",
            BlockBody::Paragraph(_) => "paragraph",
            BlockBody::Quote(_) => "quote",
            BlockBody::Callout(_) => "callout",
            BlockBody::Todo { .. } => "todo",
            BlockBody::Divider => "divider",
            BlockBody::ComparisonCard(_) => "comparison-card",
            BlockBody::VerdictCard(_) => "verdict-card",
        }
    }

    /// Text of a text-bearing block; `None` for dividers and cards.
    pub fn text(&self) -> Option<&str> {
        match self {
            BlockBody::Heading1(t)
            | BlockBody::Heading2(t)
            | BlockBody::Heading3(t)
            | BlockBody::Paragraph(t)
            | BlockBody::Quote(t)
            | BlockBody::Callout(t) => Some(t),
            BlockBody::Todo { text, .. } => Some(text),
            BlockBody::Divider | BlockBody::ComparisonCard(_) | BlockBody::VerdictCard(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "WireBlock")]
pub struct ContentBlock {
    pub id: String,
    pub body: BlockBody,
}

impl ContentBlock {
    /// Wraps a body with a freshly generated id.
    pub fn new(body: BlockBody) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            body,
        }
    }

    pub fn type_tag(&self) -> &'static str {
        self.body.type_tag()
    }

    /// Flattens to the wire form, JSON-encoding card payloads into `content`.
    pub fn to_wire(&self) -> Result<WireBlock, serde_json::Error> {
        let (content, properties) = match &self.body {
            BlockBody::Todo { text, checked } => (
                text.clone(),
                Some(BlockProperties {
                    checked: Some(*checked),
                }),
            ),
            BlockBody::Divider => (String::new(), None),
            BlockBody::ComparisonCard(card) => (serde_json::to_string(card)?, None),
            BlockBody::VerdictCard(card) => (serde_json::to_string(card)?, None),
            other => (other.text().unwrap_or_default().to_string(), None),
        };

        Ok(WireBlock {
            id: self.id.clone(),
            kind: self.type_tag().to_string(),
            content,
            properties,
            parent_id: None,
            children: Vec::new(),
        })
    }
}

impl Serialize for ContentBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire form
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

/// Flat block shape expected by the document viewer and the document store.
/// Nesting fields exist for the editor; the engine always emits a flat list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BlockProperties>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub children: Vec<WireBlock>,
}

#[derive(Debug, Error)]
pub enum BlockDecodeError {
    #[error("Unknown block type: {0}")]
    UnknownType(String),

    #[error("Malformed {kind} payload: {source}")]
    Payload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl TryFrom<WireBlock> for ContentBlock {
    type Error = BlockDecodeError;

    fn try_from(wire: WireBlock) -> Result<Self, Self::Error> {
        let WireBlock {
            id, kind, content, properties, ..
        } = wire;

        let body = match kind.as_str() {
            "heading-1" => BlockBody::Heading1(content),
            "heading-2" => BlockBody::Heading2(content),
            "heading-3" => BlockBody::Heading3(content),
            "paragraph" => BlockBody::Paragraph(content),
            "quote" => BlockBody::Quote(content),
            "callout" => BlockBody::Callout(content),
            "todo" => BlockBody::Todo {
                text: content,
                checked: properties.and_then(|p| p.checked).unwrap_or(false),
            },
            "divider" => BlockBody::Divider,
            "comparison-card" => BlockBody::ComparisonCard(
                serde_json::from_str(&content).map_err(|source| BlockDecodeError::Payload {
                    kind: "comparison-card",
                    source,
                })?,
            ),
            "verdict-card" => BlockBody::VerdictCard(serde_json::from_str(&content).map_err(
                |source| BlockDecodeError::Payload {
                    kind: "verdict-card",
                    source,
                },
            )?),
            _ => return Err(BlockDecodeError::UnknownType(kind)),
        };

        Ok(ContentBlock { id, body })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Writer
// ────────────────────────────────────────────────────────────────────────────

/// Append-only block sequence; emission order is display order.
#[derive(Debug, Default)]
pub struct BlockWriter {
    blocks: Vec<ContentBlock>,
}

impl BlockWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, body: BlockBody) {
        self.blocks.push(ContentBlock::new(body));
    }

    pub fn heading1(&mut self, text: impl Into<String>) {
        self.push(BlockBody::Heading1(text.into()));
    }

    pub fn heading2(&mut self, text: impl Into<String>) {
        self.push(BlockBody::Heading2(text.into()));
    }

    pub fn heading3(&mut self, text: impl Into<String>) {
        self.push(BlockBody::Heading3(text.into()));
    }

    pub fn paragraph(&mut self, text: impl Into<String>) {
        self.push(BlockBody::Paragraph(text.into()));
    }

    pub fn quote(&mut self, text: impl Into<String>) {
        self.push(BlockBody::Quote(text.into()));
    }

    pub fn callout(&mut self, text: impl Into<String>) {
        self.push(BlockBody::Callout(text.into()));
    }

    pub fn todo(&mut self, text: impl Into<String>, checked: bool) {
        self.push(BlockBody::Todo {
            text: text.into(),
            checked,
        });
    }

    pub fn divider(&mut self) {
        self.push(BlockBody::Divider);
    }

    pub fn finish(self) -> Vec<ContentBlock> {
        self.blocks
    }
}
