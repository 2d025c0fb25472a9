//! Types for the folio-commonmark public API.
use serde::{Deserialize, Serialize};

/// A single entry of the heading outline of a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Heading {
  /// Heading text as plain, entity-decoded prose (no markdown formatting).
  pub text:  String,
  /// Heading level (1-6).
  pub level: u8,
  /// Anchor slug for the heading. Matches the `id` attribute embedded in the
  /// rendered HTML exactly.
  pub slug:  String,
}

/// Result of rendering a markdown document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderedDocument {
  /// Rendered HTML output.
  pub html: String,

  /// Heading outline in document order (for ToC, navigation, etc).
  pub headings: Vec<Heading>,
}
