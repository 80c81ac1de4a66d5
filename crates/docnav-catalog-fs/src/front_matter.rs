//! YAML front matter parsing.
//!
//! Only the fields navigation cares about are extracted; everything else in
//! the block is ignored.

use serde::Deserialize;

/// Navigation-relevant front matter fields.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub(crate) struct FrontMatter {
    pub id: Option<String>,
    pub title: Option<String>,
    pub sidebar_label: Option<String>,
    pub slug: Option<String>,
}

/// Return the YAML between a leading `---` line and the next `---` line.
///
/// Returns `None` when the file has no front matter or the block is never
/// closed.
pub(crate) fn split_front_matter(content: &str) -> Option<&str> {
    let rest = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = rest.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

/// Parse front matter from full file content.
///
/// Files without a block yield the default (all fields `None`).
///
/// # Errors
///
/// Returns the YAML parser message if the block is malformed.
pub(crate) fn parse_front_matter(content: &str) -> Result<FrontMatter, String> {
    let Some(block) = split_front_matter(content) else {
        return Ok(FrontMatter::default());
    };
    let trimmed = block.trim();
    if trimmed.is_empty() {
        return Ok(FrontMatter::default());
    }
    serde_yaml::from_str(trimmed).map_err(|e| e.to_string())
}
