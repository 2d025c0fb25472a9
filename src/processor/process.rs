//! High-level processing functions with error recovery.
//!
//! A content rendering failure must never break page rendering, so the
//! convenience API constructs a fresh, fully configured processor per call
//! and degrades to empty output if anything inside the pipeline panics.
use log::error;

use super::types::{MarkdownOptions, MarkdownProcessor};
use crate::types::RenderedDocument;

/// Render markdown content with error recovery.
///
/// Falls back to an empty document if processing fails at any stage; the
/// failure is logged, never surfaced.
#[must_use]
pub fn process_with_recovery(
  processor: &MarkdownProcessor,
  content: &str,
) -> RenderedDocument {
  match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
    processor.render(content)
  })) {
    Ok(result) => result,
    Err(panic_err) => {
      error!("Panic during markdown processing: {panic_err:?}");
      RenderedDocument {
        html:     String::new(),
        headings: Vec::new(),
      }
    },
  }
}

/// Run a derived-view computation, degrading to the type's empty value on
/// panic.
fn recover_or_default<T, F>(what: &str, f: F) -> T
where
  T: Default,
  F: FnOnce() -> T,
{
  match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
    Ok(value) => value,
    Err(panic_err) => {
      error!("Panic while {what}: {panic_err:?}");
      T::default()
    },
  }
}

/// Render a document with the default site configuration.
///
/// Returns the full HTML plus the heading outline; anchor ids in the HTML
/// match the outline slugs exactly.
#[must_use]
pub fn render_document(raw: &str) -> RenderedDocument {
  let processor = MarkdownProcessor::new(MarkdownOptions::default());
  process_with_recovery(&processor, raw)
}

/// Extract a plain-text excerpt from the first `max_chars` characters of the
/// raw input. The site default window is
/// [`DEFAULT_EXCERPT_CHARS`](super::types::DEFAULT_EXCERPT_CHARS).
#[must_use]
pub fn extract_excerpt(raw: &str, max_chars: usize) -> String {
  recover_or_default("extracting excerpt", || {
    MarkdownProcessor::new(MarkdownOptions::default())
      .excerpt_with_limit(raw, max_chars)
  })
}

/// Collect every image URL referenced in the document, in document order.
#[must_use]
pub fn collect_images(raw: &str) -> Vec<String> {
  recover_or_default("collecting images", || {
    MarkdownProcessor::new(MarkdownOptions::default()).collect_images(raw)
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_render_document_basic() {
    let result = render_document("# Test Heading\n\nSome content.");

    assert!(result.html.contains("<h1"));
    assert!(result.html.contains("Test Heading"));
    assert_eq!(result.headings.len(), 1);
    assert_eq!(result.headings[0].slug, "test-heading");
  }

  #[test]
  fn test_recover_or_default_success() {
    let result = recover_or_default("testing", || "ok".to_string());
    assert_eq!(result, "ok");
  }

  #[test]
  #[allow(clippy::panic)]
  fn test_recover_or_default_fallback() {
    let result: String =
      recover_or_default("testing", || panic!("test panic"));
    assert_eq!(result, "");
  }

  #[test]
  fn test_empty_input_yields_empty_views() {
    let result = render_document("");
    assert_eq!(result.html, "");
    assert!(result.headings.is_empty());
    assert_eq!(extract_excerpt("", 140), "");
    assert!(collect_images("").is_empty());
  }
}
