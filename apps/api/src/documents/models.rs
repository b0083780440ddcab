use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reality::ContentBlock;

/// A stored reality-check page. Blocks serialize in their flat wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    pub icon: Option<String>,
    pub cover_image: Option<String>,
    pub blocks: Vec<ContentBlock>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn new(title: impl Into<String>, blocks: Vec<ContentBlock>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            icon: None,
            cover_image: None,
            blocks,
            created_at: now,
            updated_at: now,
        }
    }
}
