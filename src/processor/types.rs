//! Type definitions for the Markdown processor.
//!
//! Contains the configuration options (`MarkdownOptions`), their builder, and
//! the processor struct itself. The processing pipeline lives in
//! [`super::core`].
//!
//! # Examples
//!
//! ```
//! use folio_commonmark::{MarkdownOptions, MarkdownProcessor};
//!
//! let options = MarkdownOptions {
//!   gfm: true,
//!   footnotes: true,
//!   ..Default::default()
//! };
//!
//! let processor = MarkdownProcessor::new(options);
//! ```

/// Number of raw input characters an excerpt is derived from unless a caller
/// overrides it.
pub const DEFAULT_EXCERPT_CHARS: usize = 140;

/// Options for configuring the Markdown processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
  /// Enable GitHub Flavored Markdown extensions (tables, strikethrough,
  /// task lists, autolinks).
  pub gfm: bool,

  /// Enable the footnote constructs (`[^ref]` references and `[^ref]: ...`
  /// definitions) with anchor-based rendering.
  pub footnotes: bool,

  /// Wrap images in `<figure>` elements, with a `<figcaption>` when the
  /// image carries a title.
  pub captioned_images: bool,

  /// Reserved code block language tag rendered as a raw diagram container
  /// (`<div class="mermaid">...</div>`) instead of a highlighted code block.
  /// `None` disables diagram handling entirely.
  pub diagram_language: Option<String>,

  /// Number of raw input characters excerpts are derived from.
  pub excerpt_chars: usize,
}

impl Default for MarkdownOptions {
  fn default() -> Self {
    Self {
      gfm:              true,
      footnotes:        true,
      captioned_images: true,
      diagram_language: Some("mermaid".to_owned()),
      excerpt_chars:    DEFAULT_EXCERPT_CHARS,
    }
  }
}

/// Main Markdown processor.
///
/// Every call parses its input with a fresh arena and freshly built comrak
/// options, so a processor value holds no parser state and can be shared or
/// cloned freely across threads.
#[derive(Debug, Clone)]
pub struct MarkdownProcessor {
  pub(crate) options: MarkdownOptions,
}

/// Builder for constructing `MarkdownOptions` with method chaining.
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptionsBuilder {
  options: MarkdownOptions,
}

impl MarkdownOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Enable or disable GitHub Flavored Markdown.
  #[must_use]
  pub const fn gfm(mut self, enabled: bool) -> Self {
    self.options.gfm = enabled;
    self
  }

  /// Enable or disable footnote constructs.
  #[must_use]
  pub const fn footnotes(mut self, enabled: bool) -> Self {
    self.options.footnotes = enabled;
    self
  }

  /// Enable or disable `<figure>` wrapping for images.
  #[must_use]
  pub const fn captioned_images(mut self, enabled: bool) -> Self {
    self.options.captioned_images = enabled;
    self
  }

  /// Set the reserved diagram language tag, or `None` to disable diagram
  /// containers.
  #[must_use]
  pub fn diagram_language<S: Into<String>>(mut self, language: Option<S>) -> Self {
    self.options.diagram_language = language.map(Into::into);
    self
  }

  /// Set the excerpt input window, in characters.
  #[must_use]
  pub const fn excerpt_chars(mut self, chars: usize) -> Self {
    self.options.excerpt_chars = chars;
    self
  }

  /// Build the final `MarkdownOptions`.
  #[must_use]
  pub fn build(self) -> MarkdownOptions {
    self.options
  }
}
