//! Front matter extraction.
//!
//! Front matter is a leading `---` fence line, YAML content, and a closing
//! `---` line. The body starts on the line after the closing fence; its byte
//! offset is reported so node spans can index the original file bytes.

use quill_core::FrontMatter;

use crate::error::ParseError;

/// Result of splitting a source document at its front matter fence.
pub(crate) struct SplitSource<'a> {
    /// YAML text between the fences, if a complete fence pair was found.
    pub yaml: Option<&'a str>,
    /// Document body after the closing fence (the whole input otherwise).
    pub body: &'a str,
    /// Byte offset of `body` within the original source.
    pub body_offset: usize,
}

/// Split `source` into front matter YAML and body.
///
/// An unterminated fence is not front matter; the whole input is body.
pub(crate) fn split(source: &str) -> SplitSource<'_> {
    let whole = SplitSource {
        yaml: None,
        body: source,
        body_offset: 0,
    };

    let mut segments = source.split_inclusive('\n');
    let Some(first) = segments.next() else {
        return whole;
    };
    if first.trim_end() != "---" {
        return whole;
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for segment in segments {
        let line_start = offset;
        offset += segment.len();
        if segment.trim_end() == "---" {
            return SplitSource {
                yaml: Some(&source[yaml_start..line_start]),
                body: &source[offset..],
                body_offset: offset,
            };
        }
    }
    whole
}

/// Parse front matter YAML into a [`FrontMatter`] mapping.
pub(crate) fn parse(yaml: &str) -> Result<FrontMatter, ParseError> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatter::new());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
