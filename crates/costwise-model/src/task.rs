use serde::{Deserialize, Serialize};

/// Tags as they arrive on the wire: either a proper list or a single
/// comma-separated string.
///
/// Clients are inconsistent about this, so both shapes deserialize
/// transparently. All downstream code goes through [`TagList::normalized`]
/// and never sees the raw form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagList {
    /// Tags already split into a sequence.
    List(Vec<String>),
    /// Tags as one comma-separated string.
    Csv(String),
}

impl TagList {
    /// Normalize to a lowercase tag sequence.
    ///
    /// The CSV form is split on commas with each piece trimmed; the list
    /// form is lowercased element-wise without trimming. An empty CSV
    /// string yields a single empty tag, not an empty list.
    pub fn normalized(&self) -> Vec<String> {
        match self {
            TagList::Csv(s) => s.split(',').map(|t| t.trim().to_lowercase()).collect(),
            TagList::List(v) => v.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// Returns `true` when no tags were supplied on the wire.
    ///
    /// This inspects the raw form, not the normalized one: `Csv("")` is
    /// empty here even though [`TagList::normalized`] turns it into a
    /// single empty tag, so the extraction tag count for it is 1.
    pub fn is_empty(&self) -> bool {
        match self {
            TagList::Csv(s) => s.is_empty(),
            TagList::List(v) => v.is_empty(),
        }
    }
}

impl Default for TagList {
    fn default() -> Self {
        TagList::List(Vec::new())
    }
}

impl From<Vec<String>> for TagList {
    fn from(v: Vec<String>) -> Self {
        TagList::List(v)
    }
}

impl From<&[&str]> for TagList {
    fn from(v: &[&str]) -> Self {
        TagList::List(v.iter().map(|t| t.to_string()).collect())
    }
}

impl From<&str> for TagList {
    fn from(s: &str) -> Self {
        TagList::Csv(s.to_string())
    }
}

/// A task as described by the caller: free text plus tags.
///
/// Missing fields default to empty values so feature extraction never has
/// to deal with absent text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskDescription {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: TagList,
}

impl TaskDescription {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tags: impl Into<TagList>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags: tags.into(),
        }
    }
}
