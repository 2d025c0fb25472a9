//! Markdown processing module with modular organization.
//!
//! # Architecture
//!
//! - [`core`]: processor implementation and the derived-view pipeline
//! - [`extensions`]: AST rewrites for the site-specific constructs
//!   (footnotes, diagram blocks, captioned figures)
//! - [`process`]: high-level processing functions with error recovery
//! - [`types`]: configuration structures and the processor struct
pub mod core;
pub mod extensions;
pub mod process;
pub mod types;

pub use core::extract_inline_text;

pub use process::{
  collect_images,
  extract_excerpt,
  process_with_recovery,
  render_document,
};
pub use types::{
  DEFAULT_EXCERPT_CHARS,
  MarkdownOptions,
  MarkdownOptionsBuilder,
  MarkdownProcessor,
};
