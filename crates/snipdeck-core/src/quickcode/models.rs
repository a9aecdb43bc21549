use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// A user-defined group of quick code snippets.
///
/// Groups sort ascending by `order`; the sort key is fractional so a group
/// can be moved between two others without renumbering its siblings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CodeGroup {
    pub name: String,
    #[serde(default)]
    pub code_items: Vec<CodeItem>,
    pub order: f64,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// One quick code snippet. Belongs to exactly one [`CodeGroup`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CodeItem {
    pub name: String,
    #[serde(default)]
    pub imports: Vec<String>,
    pub code: String,
    pub order: f64,
    #[serde(default = "default_true")]
    pub enabled: bool,
}
