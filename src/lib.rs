//! # folio-commonmark
//!
//! Flavored CommonMark processor for a portfolio/blog site, featuring
//! AST-based processing with footnote constructs, diagram code blocks,
//! captioned figures, and the derived document views the site is built on:
//! heading outline, plain-text excerpt, and image-reference list.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_commonmark::{MarkdownOptions, MarkdownProcessor};
//!
//! let processor = MarkdownProcessor::new(MarkdownOptions::default());
//! let result = processor.render("# Hello World\n\nThis is **bold** text.");
//!
//! println!("HTML: {}", result.html);
//! println!("Outline: {:?}", result.headings);
//! ```
//!
//! ## Features
//!
//! - **AST-based processing** using `comrak` for robust, maintainable code
//! - **Footnote constructs** (`[^ref]` references, `[^ref]: ...` definitions)
//!   rendered as paired superscript anchors
//! - **Diagram code blocks** passed through verbatim for client-side
//!   renderers (` ```mermaid `)
//! - **Captioned figures**: images wrap in `<figure>`, titles become
//!   `<figcaption>`
//! - **Heading outline** with anchor ids guaranteed to match the rendered
//!   HTML
//! - **Error recovery** with graceful degradation for malformed input; no
//!   content can make page rendering fail
//!
//! ## Derived views
//!
//! Each view is a pure function of the raw input, computed with a fresh
//! parser instance per call:
//!
//! ```rust
//! use folio_commonmark::{collect_images, extract_excerpt, render_document};
//!
//! let raw = "# Post\n\nAn ![inline](/img/chart.png) image.";
//! let rendered = render_document(raw);
//! let teaser = extract_excerpt(raw, 140);
//! let thumbnails = collect_images(raw);
//!
//! assert_eq!(rendered.headings[0].slug, "post");
//! assert_eq!(thumbnails, vec!["/img/chart.png".to_string()]);
//! ```
pub mod processor;
mod types;
pub mod utils;

pub use crate::{
  processor::{
    DEFAULT_EXCERPT_CHARS,
    MarkdownOptions,
    MarkdownOptionsBuilder,
    MarkdownProcessor,
    collect_images,
    extract_excerpt,
    process_with_recovery,
    render_document,
  },
  types::{Heading, RenderedDocument},
};
