//! Core implementation of the Markdown processor.
//!
//! This module contains the main implementation of `MarkdownProcessor`,
//! covering the rendering pipeline and the derived views (heading outline,
//! excerpt, image list).
use comrak::{
  Arena,
  nodes::{AstNode, NodeHtmlBlock, NodeValue},
  options::Options,
  parse_document,
};
use log::trace;

use super::{
  extensions,
  types::{MarkdownOptions, MarkdownProcessor},
};
use crate::{
  types::{Heading, RenderedDocument},
  utils::{self, SlugCounter},
};

impl MarkdownProcessor {
  /// Create a new `MarkdownProcessor` with the given options.
  #[must_use]
  pub const fn new(options: MarkdownOptions) -> Self {
    Self { options }
  }

  /// Access processor options.
  #[must_use]
  pub const fn options(&self) -> &MarkdownOptions {
    &self.options
  }

  /// Render Markdown to HTML, extracting the heading outline.
  ///
  /// Anchor ids embedded in the HTML and the slugs in the returned outline
  /// come from one shared pass, so they always match.
  #[must_use]
  pub fn render(&self, markdown: &str) -> RenderedDocument {
    let arena = Arena::new();
    let options = self.comrak_options();
    let root = parse_document(&arena, markdown, &options);

    if let Some(language) = self.options.diagram_language.as_deref() {
      extensions::process_diagram_blocks(root, language);
    }
    if self.options.footnotes {
      extensions::process_footnote_definitions(&arena, root);
      extensions::process_footnote_references(root);
    }
    if self.options.captioned_images {
      extensions::process_captioned_images(root, &options);
    }

    let headings = assign_heading_anchors(root, &options);

    let mut html = String::new();
    comrak::format_html(root, &options, &mut html).unwrap_or_default();

    trace!(
      "Rendered {} bytes of markdown into {} bytes of HTML with {} headings",
      markdown.len(),
      html.len(),
      headings.len()
    );
    RenderedDocument { html, headings }
  }

  /// Produce a plain-text excerpt from the first `excerpt_chars` characters
  /// of the raw input.
  #[must_use]
  pub fn excerpt(&self, markdown: &str) -> String {
    self.excerpt_with_limit(markdown, self.options.excerpt_chars)
  }

  /// Produce a plain-text excerpt from the first `max_chars` characters of
  /// the raw input.
  ///
  /// The truncation may split a markdown construct; that is an accepted
  /// cosmetic defect of the teaser, not a correctness issue. The output is
  /// entity-decoded, whitespace-collapsed, and guaranteed to contain no HTML
  /// tags.
  #[must_use]
  pub fn excerpt_with_limit(&self, markdown: &str, max_chars: usize) -> String {
    let prefix: String = markdown.chars().take(max_chars).collect();
    let arena = Arena::new();
    let options = self.comrak_options();
    let root = parse_document(&arena, &prefix, &options);

    let text = utils::plain_text_of(root);
    let decoded = html_escape::decode_html_entities(&text);
    // Stray angle brackets in prose or code text would read as leaked
    // markup; the tag-free guarantee wins over keeping them.
    let sanitized = decoded.replace(['<', '>'], " ");
    sanitized.split_whitespace().collect::<Vec<_>>().join(" ")
  }

  /// Collect every image URL referenced in the document, in depth-first
  /// document order. Duplicates are preserved; images nested inside links or
  /// footnote bodies are included.
  #[must_use]
  pub fn collect_images(&self, markdown: &str) -> Vec<String> {
    let arena = Arena::new();
    let options = self.comrak_options();
    let root = parse_document(&arena, markdown, &options);

    let mut images = Vec::new();
    for node in root.descendants() {
      if let NodeValue::Image(ref link) = node.data.borrow().value {
        images.push(link.url.clone());
      }
    }
    images
  }

  /// Build comrak options from `MarkdownOptions`.
  fn comrak_options(&self) -> Options<'_> {
    let mut options = Options::default();
    if self.options.gfm {
      options.extension.table = true;
      options.extension.strikethrough = true;
      options.extension.tasklist = true;
      options.extension.autolink = true;
    }
    options.extension.footnotes = self.options.footnotes;
    options.render.r#unsafe = true;
    options
  }
}

/// Extract the heading outline and embed matching anchor ids, in one pass.
///
/// For each heading, in document order: extract its plain inline text
/// (entity-decoded for the outline), assign a collision-free slug, and
/// rewrite the node into a heading tag carrying `id="{slug}"` whose inner
/// HTML is produced by comrak's own inline formatter. A single `SlugCounter`
/// drives both outputs, so render-time ids cannot drift from outline slugs.
fn assign_heading_anchors<'a>(
  root: &'a AstNode<'a>,
  options: &Options,
) -> Vec<Heading> {
  let nodes: Vec<_> = root
    .descendants()
    .filter(|n| matches!(n.data.borrow().value, NodeValue::Heading(_)))
    .collect();

  let mut counter = SlugCounter::new();
  let mut headings = Vec::with_capacity(nodes.len());

  for node in nodes {
    let level = match &node.data.borrow().value {
      NodeValue::Heading(nh) => nh.level,
      _ => continue,
    };

    let text = html_escape::decode_html_entities(&extract_inline_text(node))
      .trim()
      .to_string();
    let slug = counter.assign(&text);

    let mut inner = String::new();
    for child in node.children() {
      comrak::format_html(child, options, &mut inner).unwrap_or_default();
    }
    let children: Vec<_> = node.children().collect();
    for child in children {
      child.detach();
    }
    node.data.borrow_mut().value = NodeValue::HtmlBlock(NodeHtmlBlock {
      block_type: 6,
      literal:    format!("<h{level} id=\"{slug}\">{inner}</h{level}>\n"),
    });

    headings.push(Heading { text, level, slug });
  }

  headings
}

/// Extract all plain inline text from a heading node.
pub fn extract_inline_text<'a>(node: &'a AstNode<'a>) -> String {
  let mut text = String::new();
  for child in node.children() {
    match &child.data.borrow().value {
      NodeValue::Text(t) => text.push_str(t),
      NodeValue::Code(t) => text.push_str(&t.literal),
      NodeValue::Link(..)
      | NodeValue::Emph
      | NodeValue::Strong
      | NodeValue::Strikethrough
      | NodeValue::Superscript => {
        text.push_str(&extract_inline_text(child));
      },
      // Raw HTML, images and footnote markers contribute no outline text.
      _ => {},
    }
  }
  text
}
