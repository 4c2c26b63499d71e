//! Content buffers shared between a page render and its layout render.

use std::collections::HashMap;

/// Name under which the default (unnamed) content slot is addressed.
pub const DEFAULT_CONTENT_KEY: &str = "content";

/// Key of a content slot: the default main-content slot or a named block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentKey {
    Default,
    Named(String),
}

impl ContentKey {
    /// `None` and `"content"` both address the default slot.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            None | Some(DEFAULT_CONTENT_KEY) => Self::Default,
            Some(other) => Self::Named(other.to_string()),
        }
    }
}

/// Accumulated output of one request: the default slot plus named blocks.
///
/// The default slot always exists (it starts empty) and only page output
/// reaches it. Named blocks are absent until captured, and an absent block is
/// distinct from an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBuffers {
    default: String,
    named: HashMap<String, String>,
}

impl ContentBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append rendered page output to the default slot.
    pub fn append_default(&mut self, text: &str) {
        self.default.push_str(text);
    }

    pub fn default_content(&self) -> &str {
        &self.default
    }

    /// Store a block, replacing any earlier value under the same key.
    ///
    /// A capture under the default key lands in the named map; reads of the
    /// default key keep returning the page output.
    pub fn set(&mut self, key: ContentKey, value: String) {
        let name = match key {
            ContentKey::Default => DEFAULT_CONTENT_KEY.to_string(),
            ContentKey::Named(name) => name,
        };
        self.named.insert(name, value);
    }

    pub fn get(&self, key: &ContentKey) -> Option<&str> {
        match key {
            ContentKey::Default => Some(&self.default),
            ContentKey::Named(name) => self.named.get(name).map(String::as_str),
        }
    }

    pub fn contains(&self, key: &ContentKey) -> bool {
        self.get(key).is_some()
    }

    /// Names of all captured blocks, sorted.
    pub fn named_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.named.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
