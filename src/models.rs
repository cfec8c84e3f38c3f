//! Frontend Models
//!
//! Data structures matching the item API.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Todo item as returned by the item API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub task: String,
    pub status: ItemStatus,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Pending,
    Completed,
}

impl ItemStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Completed => "completed",
        }
    }

    /// The other status; toggling twice is a no-op
    pub fn toggled(self) -> Self {
        match self {
            ItemStatus::Pending => ItemStatus::Completed,
            ItemStatus::Completed => ItemStatus::Pending,
        }
    }

    pub fn is_completed(self) -> bool {
        self == ItemStatus::Completed
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status dropdown value; `All` is the empty string on the wire and in the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    /// Dropdown options in display order
    pub const OPTIONS: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "",
            StatusFilter::Pending => "pending",
            StatusFilter::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Completed => "Completed",
        }
    }

    /// Unknown values fall back to `All`
    pub fn parse(value: &str) -> Self {
        match value {
            "pending" => StatusFilter::Pending,
            "completed" => StatusFilter::Completed,
            _ => StatusFilter::All,
        }
    }

    pub fn is_all(self) -> bool {
        self == StatusFilter::All
    }
}

/// The (query, status) pair narrowing the list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub status: StatusFilter,
}

impl FilterState {
    #[cfg(test)]
    pub fn new(query: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }
}

/// Body of `POST /items`
#[derive(Debug, Clone, Serialize)]
pub struct NewItem {
    pub task: String,
    pub status: ItemStatus,
}

impl NewItem {
    pub fn pending(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            status: ItemStatus::Pending,
        }
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
