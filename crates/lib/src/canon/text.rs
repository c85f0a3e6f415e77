//! Semantic Text Normalizer.
//!
//! Embedded configuration documents are indentation-structured `key: value`
//! text. Two documents that differ only in indentation width, spacing after
//! the `:` separator, blank lines or full-line comments normalize to the same
//! string. Nesting depth is derived from relative indentation, so a document
//! indented by four spaces and one indented by two are equivalent.
//!
//! Text that does not parse degrades to an opaque form: comment lines are
//! dropped and every run of whitespace collapses to one space.
//!
//! The result is idempotent: normalizing normalized text returns it unchanged.

use std::fmt::Write;

use thiserror::Error;
use tracing::debug;

use crate::consts::CANONICAL_INDENT;

#[derive(Debug, Error, PartialEq, Eq)]
enum ParseError {
  #[error("line {line}: tab in indentation")]
  TabIndent { line: usize },
  #[error("line {line}: indentation does not match any enclosing level")]
  Dedent { line: usize },
  #[error("line {line}: indented under a key that already has a value")]
  UnexpectedIndent { line: usize },
  #[error("line {line}: expected `key: value` or a `- ` item")]
  NotKeyValue { line: usize },
}

#[derive(Debug, PartialEq, Eq)]
enum Content {
  /// `key: value`, or `key:` when the value is empty.
  Pair { key: String, value: String },
  /// `- value`, or a bare `-` when the value is empty.
  Item { value: String },
  /// `- key: value`
  ItemPair { key: String, value: String },
}

impl Content {
  /// True when the next line may be indented deeper than this one.
  fn opens_block(&self) -> bool {
    match self {
      Content::Pair { value, .. } => value.is_empty(),
      Content::Item { .. } | Content::ItemPair { .. } => true,
    }
  }
}

#[derive(Debug, PartialEq, Eq)]
struct Line {
  depth: usize,
  content: Content,
}

/// Split at the first `:` followed by whitespace or the end of the line.
fn split_key_value(s: &str) -> Option<(String, String)> {
  let bytes = s.as_bytes();
  for (idx, _) in s.match_indices(':') {
    let next = bytes.get(idx + 1);
    if next.is_none_or(|b| b.is_ascii_whitespace()) {
      let key = s[..idx].trim_end();
      if key.is_empty() {
        return None;
      }
      return Some((key.to_string(), s[idx + 1..].trim().to_string()));
    }
  }
  None
}

fn parse_content(trimmed: &str, line: usize) -> Result<Content, ParseError> {
  let item_rest = if trimmed == "-" {
    Some("")
  } else {
    trimmed.strip_prefix("- ").map(str::trim)
  };

  match item_rest {
    Some(rest) => Ok(match split_key_value(rest) {
      Some((key, value)) => Content::ItemPair { key, value },
      None => Content::Item {
        value: rest.to_string(),
      },
    }),
    None => split_key_value(trimmed)
      .map(|(key, value)| Content::Pair { key, value })
      .ok_or(ParseError::NotKeyValue { line }),
  }
}

fn is_comment_or_blank(trimmed: &str) -> bool {
  trimmed.is_empty() || trimmed.starts_with('#')
}

fn parse(text: &str) -> Result<Vec<Line>, ParseError> {
  let mut lines: Vec<Line> = Vec::new();
  // Indent columns of the enclosing levels; the last entry is the current one.
  let mut levels: Vec<usize> = Vec::new();

  for (idx, raw) in text.lines().enumerate() {
    let line_no = idx + 1;
    let trimmed = raw.trim();
    if is_comment_or_blank(trimmed) {
      continue;
    }

    let leading = &raw[..raw.len() - raw.trim_start().len()];
    if leading.contains('\t') {
      return Err(ParseError::TabIndent { line: line_no });
    }
    let indent = leading.len();

    match levels.last().copied() {
      None => levels.push(indent),
      Some(current) if indent > current => {
        let opens = lines.last().is_some_and(|prev| prev.content.opens_block());
        if !opens {
          return Err(ParseError::UnexpectedIndent { line: line_no });
        }
        levels.push(indent);
      }
      Some(current) if indent < current => {
        while levels.last().is_some_and(|&col| col > indent) {
          levels.pop();
        }
        if levels.last() != Some(&indent) {
          return Err(ParseError::Dedent { line: line_no });
        }
      }
      Some(_) => {}
    }

    lines.push(Line {
      depth: levels.len() - 1,
      content: parse_content(trimmed, line_no)?,
    });
  }

  Ok(lines)
}

fn serialize(lines: &[Line]) -> String {
  let mut out = String::new();
  for (idx, line) in lines.iter().enumerate() {
    if idx > 0 {
      out.push('\n');
    }
    for _ in 0..line.depth * CANONICAL_INDENT {
      out.push(' ');
    }
    let _ = match &line.content {
      Content::Pair { key, value } if value.is_empty() => write!(out, "{}:", key),
      Content::Pair { key, value } => write!(out, "{}: {}", key, value),
      Content::Item { value } if value.is_empty() => write!(out, "-"),
      Content::Item { value } => write!(out, "- {}", value),
      Content::ItemPair { key, value } if value.is_empty() => write!(out, "- {}:", key),
      Content::ItemPair { key, value } => write!(out, "- {}: {}", key, value),
    };
  }
  out
}

fn collapse(text: &str) -> String {
  text
    .lines()
    .filter(|line| !is_comment_or_blank(line.trim()))
    .flat_map(str::split_whitespace)
    .collect::<Vec<_>>()
    .join(" ")
}

/// Normalize embedded structured text into its canonical form.
///
/// The canonical form uses two spaces per nesting level and `key: value`
/// with exactly one space after the separator. Callers hashing the result
/// append the token separator themselves.
pub fn normalize_embedded_text(text: &str) -> String {
  match parse(text) {
    Ok(lines) => serialize(&lines),
    Err(err) => {
      debug!(reason = %err, "embedded text is not structured, using opaque form");
      let collapsed = collapse(text);
      // The collapsed form can itself be a one-line document.
      match parse(&collapsed) {
        Ok(lines) => serialize(&lines),
        Err(_) => collapsed,
      }
    }
  }
}
