use serde::{Deserialize, Serialize};

/// One immediate child of the scanned examples directory. The name is
/// opaque: nothing inside the entry is read or validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleEntry {
    pub name: String,
    pub is_dir: bool,
}

/// One rendered link: the entry name plus the relative path the markdown
/// bullet (or JSON object) points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedExample {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct ListingResult {
    pub links: Vec<LinkedExample>,
    pub markdown_output: String,
    pub json_output: String,
}
