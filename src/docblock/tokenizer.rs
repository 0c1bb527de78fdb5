//! Splitting a raw doc comment into narrative text and tag occurrences.

use smol_str::SmolStr;

/// One `@name body` occurrence, body not yet interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTag {
    pub name: SmolStr,
    pub body: String,
}

/// A doc comment split into its parts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawDocBlock {
    pub summary: String,
    pub description: String,
    pub tags: Vec<RawTag>,
}

/// The comment tokenizer collaborator.
///
/// Returns `None` when the text is not a doc comment at all.
pub trait CommentTokenizer: Send + Sync {
    fn tokenize(&self, comment: &str) -> Option<RawDocBlock>;
}

/// Tokenizer for `/** ... */` comments.
///
/// The summary runs up to the first blank line or the first line ending in
/// a period; the description is the rest of the narrative. The tag region
/// starts at the first line that begins with `@`, and every such line opens
/// a new tag. Continuation lines belong to the tag before them.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocCommentTokenizer;

impl CommentTokenizer for DocCommentTokenizer {
    fn tokenize(&self, comment: &str) -> Option<RawDocBlock> {
        let lines = comment_lines(comment)?;

        let tag_start = lines
            .iter()
            .position(|line| starts_tag(line))
            .unwrap_or(lines.len());
        let (narrative, tag_lines) = lines.split_at(tag_start);
        let (summary, description) = split_narrative(narrative);

        let mut tags: Vec<RawTag> = Vec::new();
        for line in tag_lines {
            if starts_tag(line) {
                let (name, body) = split_tag_line(line);
                tags.push(RawTag {
                    name: SmolStr::new(name),
                    body: body.to_string(),
                });
            } else if let Some(tag) = tags.last_mut() {
                if !tag.body.is_empty() {
                    tag.body.push('\n');
                }
                tag.body.push_str(line.trim());
            }
        }
        for tag in &mut tags {
            tag.body = tag.body.trim().to_string();
        }

        Some(RawDocBlock {
            summary,
            description,
            tags,
        })
    }
}

/// Content lines of a doc comment with the delimiters and the leading
/// `*` gutter removed, surrounding blank lines dropped.
fn comment_lines(comment: &str) -> Option<Vec<&str>> {
    let inner = comment
        .trim()
        .strip_prefix("/**")?
        .strip_suffix("*/")?;

    let mut lines: Vec<&str> = inner
        .lines()
        .map(|line| {
            let line = line.trim_start();
            let line = line.strip_prefix('*').unwrap_or(line);
            let line = line.strip_prefix(' ').unwrap_or(line);
            line.trim_end()
        })
        .collect();

    while lines.first().is_some_and(|line| line.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    Some(lines)
}

fn starts_tag(line: &str) -> bool {
    let mut chars = line.trim_start().chars();
    chars.next() == Some('@') && chars.next().is_some_and(is_tag_name_char)
}

fn is_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':' | '\\')
}

fn split_tag_line(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    let rest = &line[1..];
    let end = rest
        .find(|c: char| !is_tag_name_char(c))
        .unwrap_or(rest.len());
    (&rest[..end], rest[end..].trim())
}

fn split_narrative(lines: &[&str]) -> (String, String) {
    let mut summary_end = lines.len();
    let mut description_start = lines.len();
    for (idx, line) in lines.iter().enumerate() {
        if line.is_empty() {
            summary_end = idx;
            description_start = idx + 1;
            break;
        }
        if line.ends_with('.') {
            summary_end = idx + 1;
            description_start = idx + 1;
            break;
        }
    }

    let summary = lines[..summary_end].join("\n").trim().to_string();
    let description = lines[description_start..].join("\n").trim().to_string();
    (summary, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(comment: &str) -> RawDocBlock {
        DocCommentTokenizer.tokenize(comment).unwrap()
    }

    #[test]
    fn test_summary_description_and_tags() {
        let raw = tokenize(
            "/**
              * Creates a pizza.
              * Long description
              * over two lines.
              *
              * @param Style $style the style
              *     spanning a second line
              * @return Pizza
              */",
        );
        assert_eq!(raw.summary, "Creates a pizza.");
        assert_eq!(raw.description, "Long description\nover two lines.");
        assert_eq!(raw.tags.len(), 2);
        assert_eq!(raw.tags[0].name, "param");
        assert_eq!(raw.tags[0].body, "Style $style the style\nspanning a second line");
        assert_eq!(raw.tags[1].name, "return");
        assert_eq!(raw.tags[1].body, "Pizza");
    }

    #[test]
    fn test_summary_ends_at_blank_line() {
        let raw = tokenize("/**\n * First line\n * still summary\n *\n * Description.\n */");
        assert_eq!(raw.summary, "First line\nstill summary");
        assert_eq!(raw.description, "Description.");
    }

    #[test]
    fn test_single_line_comment() {
        let raw = tokenize("/** @var Style */");
        assert!(raw.summary.is_empty());
        assert_eq!(raw.tags[0].name, "var");
        assert_eq!(raw.tags[0].body, "Style");
    }

    #[test]
    fn test_tag_names_with_dashes_and_namespaces() {
        let raw = tokenize("/**\n * @property-read int $id\n * @ORM\\Column(type=\"string\")\n * @internal\n */");
        let names: Vec<_> = raw.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["property-read", "ORM\\Column", "internal"]);
        assert_eq!(raw.tags[1].body, "(type=\"string\")");
        assert_eq!(raw.tags[2].body, "");
    }

    #[test]
    fn test_email_is_not_a_tag() {
        let raw = tokenize("/**\n * Contact\n * @ me\n */");
        assert_eq!(raw.summary, "Contact\n@ me");
        assert!(raw.tags.is_empty());
    }

    #[test]
    fn test_not_a_doc_comment() {
        assert!(DocCommentTokenizer.tokenize("/* plain */").is_none());
        assert!(DocCommentTokenizer.tokenize("").is_none());
        assert_eq!(tokenize("/***/"), RawDocBlock::default());
    }
}
