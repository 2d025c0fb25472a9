//! Slug assignment and plain-text extraction helpers.
use std::collections::HashMap;

use comrak::nodes::{AstNode, NodeValue};

/// Slugify a string for use as an anchor ID.
/// Lowercases, strips punctuation, and hyphenates whitespace runs.
#[must_use]
pub fn slugify(text: &str) -> String {
  let mut slug = String::with_capacity(text.len());
  let mut pending_hyphen = false;
  for c in text.trim().to_lowercase().chars() {
    if c.is_whitespace() {
      pending_hyphen = !slug.is_empty();
    } else if c.is_alphanumeric() || c == '-' || c == '_' {
      if pending_hyphen {
        slug.push('-');
        pending_hyphen = false;
      }
      slug.push(c);
    }
  }
  slug.trim_matches('-').to_string()
}

/// Issues collision-free slugs within one document.
///
/// The first occurrence of a slug is used verbatim; duplicates get a running
/// `-1`, `-2`, ... suffix. A suffixed candidate that collides with a slug
/// already issued for a different heading keeps incrementing, so the result
/// is unique regardless of heading order.
#[derive(Debug, Default)]
pub struct SlugCounter {
  issued: HashMap<String, usize>,
}

impl SlugCounter {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Assign the next free slug for `text`.
  pub fn assign(&mut self, text: &str) -> String {
    let mut base = slugify(text);
    if base.is_empty() {
      // All-punctuation headings still need a usable anchor.
      base = "section".to_owned();
    }

    let Some(&count) = self.issued.get(&base) else {
      self.issued.insert(base.clone(), 0);
      return base;
    };

    let mut n = count + 1;
    loop {
      let candidate = format!("{base}-{n}");
      if !self.issued.contains_key(&candidate) {
        self.issued.insert(base, n);
        self.issued.insert(candidate.clone(), 0);
        return candidate;
      }
      n += 1;
    }
  }
}

/// Collect the plain text of an AST subtree, discarding all formatting.
///
/// Text, code span and code block literals are kept; link text and image alt
/// text flow in through their child text nodes; raw HTML contributes nothing,
/// so the result never contains markup. Soft breaks and block boundaries
/// become spaces. The caller is expected to collapse whitespace.
#[must_use]
pub fn plain_text_of<'a>(node: &'a AstNode<'a>) -> String {
  let mut out = String::new();
  collect_plain_text(node, &mut out);
  out
}

fn collect_plain_text<'a>(node: &'a AstNode<'a>, out: &mut String) {
  {
    let data = node.data.borrow();
    match &data.value {
      NodeValue::Text(t) => out.push_str(t),
      NodeValue::Code(c) => out.push_str(&c.literal),
      NodeValue::CodeBlock(cb) => out.push_str(&cb.literal),
      NodeValue::SoftBreak => out.push(' '),
      // Hard breaks, raw HTML and footnote markers carry no prose.
      _ => {},
    }
  }

  for child in node.children() {
    collect_plain_text(child, out);
  }

  if node.data.borrow().value.block() {
    out.push(' ');
  }
}

/// Create a regex that never matches anything.
///
/// Used as a fallback pattern when a regex fails to compile; matching nothing
/// is safer than a trivial pattern like `^$`, which would match empty input.
#[must_use]
pub fn never_matching_regex() -> regex::Regex {
  // Asserts something impossible; this pattern is guaranteed to be valid.
  #[allow(clippy::unwrap_used, reason = "pattern is statically valid")]
  regex::Regex::new(r"[^\s\S]").unwrap()
}

#[cfg(test)]
mod tests {
  use super::{SlugCounter, slugify};

  #[test]
  fn test_slugify_basic() {
    assert_eq!(slugify("Hello World"), "hello-world");
    assert_eq!(slugify("  Trimmed  "), "trimmed");
  }

  #[test]
  fn test_slugify_strips_punctuation() {
    assert_eq!(slugify("Don't panic!"), "dont-panic");
    assert_eq!(slugify("FAQ: the basics?"), "faq-the-basics");
  }

  #[test]
  fn test_slugify_keeps_hyphens_and_underscores() {
    assert_eq!(slugify("pre-rendered_output"), "pre-rendered_output");
  }

  #[test]
  fn test_slug_counter_disambiguates() {
    let mut counter = SlugCounter::new();
    assert_eq!(counter.assign("Setup"), "setup");
    assert_eq!(counter.assign("Setup"), "setup-1");
    assert_eq!(counter.assign("Setup"), "setup-2");
  }

  #[test]
  fn test_slug_counter_avoids_issued_candidates() {
    let mut counter = SlugCounter::new();
    assert_eq!(counter.assign("Setup 1"), "setup-1");
    assert_eq!(counter.assign("Setup"), "setup");
    // "setup-1" is taken by an explicit heading, so skip over it.
    assert_eq!(counter.assign("Setup"), "setup-2");
  }

  #[test]
  fn test_slug_counter_empty_text() {
    let mut counter = SlugCounter::new();
    assert_eq!(counter.assign("!!!"), "section");
    assert_eq!(counter.assign("???"), "section-1");
  }
}
