//! Building [`DocBlock`]s from raw doc comments.

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::tag::Tag;
use super::tokenizer::{CommentTokenizer, DocCommentTokenizer};
use crate::resolve::NameContext;

/// The structured form of a doc comment.
///
/// Tags are grouped by name; within a group they keep source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocBlock {
    summary: String,
    description: String,
    tags: IndexMap<SmolStr, Vec<Tag>>,
}

impl DocBlock {
    /// An empty block: no summary, no description, no tags.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(summary: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            description: description.into(),
            tags: IndexMap::new(),
        }
    }

    pub fn add_tag(&mut self, tag: Tag) {
        self.tags
            .entry(SmolStr::new(tag.name()))
            .or_default()
            .push(tag);
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Tags with the given name, in source order. Empty when there are none.
    pub fn tags_by_name(&self, name: &str) -> &[Tag] {
        self.tags.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Tag names in order of first occurrence.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(SmolStr::as_str)
    }

    /// All tags, grouped by name.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.values().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.description.is_empty() && self.tags.is_empty()
    }

    /// The first `@param` documenting `$variable`.
    pub fn param(&self, variable: &str) -> Option<&Tag> {
        self.tags_by_name("param")
            .iter()
            .find(|tag| tag.variable() == Some(variable))
    }

    pub fn return_tag(&self) -> Option<&Tag> {
        self.tags_by_name("return").first()
    }

    pub fn var_tag(&self) -> Option<&Tag> {
        self.tags_by_name("var").first()
    }

    /// Whether the element is marked `@internal`.
    pub fn is_internal(&self) -> bool {
        self.has_tag("internal")
    }
}

/// Integrates raw doc comments into [`DocBlock`]s.
#[derive(Clone)]
pub struct DocBlockFactory {
    tokenizer: Arc<dyn CommentTokenizer>,
}

impl Default for DocBlockFactory {
    fn default() -> Self {
        Self::new(Arc::new(DocCommentTokenizer))
    }
}

impl std::fmt::Debug for DocBlockFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocBlockFactory").finish_non_exhaustive()
    }
}

impl DocBlockFactory {
    pub fn new(tokenizer: Arc<dyn CommentTokenizer>) -> Self {
        Self { tokenizer }
    }

    /// Build the block for an optional comment. Absent or malformed
    /// comments give [`DocBlock::empty`].
    pub fn create(&self, comment: Option<&str>, ctx: &NameContext) -> DocBlock {
        let Some(raw) = comment.and_then(|text| self.tokenizer.tokenize(text)) else {
            return DocBlock::empty();
        };

        let mut block = DocBlock::new(raw.summary, raw.description);
        for tag in raw.tags {
            block.add_tag(Tag::from_raw(&tag.name, &tag.body, ctx));
        }
        block
    }
}
