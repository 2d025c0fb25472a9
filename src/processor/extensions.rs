//! AST rewrites for the site-specific Markdown constructs.
//!
//! Each function here swaps the rendering of one construct by replacing node
//! values with raw `HtmlInline`/`HtmlBlock` fragments before the single
//! `format_html` pass; everything untouched falls through to comrak's base
//! renderer. None of these rewrites can fail: malformed syntax simply stays
//! plain text.
use std::sync::LazyLock;

use comrak::{
  Arena,
  nodes::{AstNode, NodeHtmlBlock, NodeValue},
  options::Options,
};
use regex::Regex;

use crate::utils;

/// Matches an inline footnote reference key. Keys are restricted to word
/// characters and hyphens so they can be embedded in `href` attributes
/// unescaped.
static DANGLING_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\[\^([A-Za-z0-9_-]+)\]").unwrap_or_else(|e| {
    log::error!("Failed to compile DANGLING_REF_RE regex: {e}");
    utils::never_matching_regex()
  })
});

/// The inline anchor emitted for a footnote reference.
fn footnote_anchor(name: &str) -> String {
  let attr = html_escape::encode_double_quoted_attribute(name);
  let text = html_escape::encode_text(name);
  format!("<sup><a href=\"#footnote:{attr}\">{text}</a></sup>")
}

/// Replace code blocks tagged with the reserved diagram language by a raw
/// `<div>` container holding the code text verbatim, so client-side diagram
/// renderers receive it unescaped. Any other language tag is left alone and
/// renders as a regular `<pre><code class="language-...">` block.
pub fn process_diagram_blocks<'a>(root: &'a AstNode<'a>, language: &str) {
  for node in root.descendants() {
    let mut data = node.data.borrow_mut();
    if let NodeValue::CodeBlock(ref ncb) = data.value {
      if ncb.info.split_whitespace().next() == Some(language) {
        let literal = ncb.literal.clone();
        data.value = NodeValue::HtmlBlock(NodeHtmlBlock {
          block_type: 6,
          literal:    format!("<div class=\"{language}\">{literal}</div>\n"),
        });
      }
    }
  }
}

/// Rewrite footnote definitions into in-flow paragraphs.
///
/// `[^ref]: body` becomes `<p><sup id="footnote:ref">ref</sup> body</p>`:
/// a `<sup>` label is prepended into the definition's first paragraph and the
/// definition node is unwrapped in place, so the body keeps flowing through
/// the same inline rendering pass as the rest of the document.
pub fn process_footnote_definitions<'a>(
  arena: &'a Arena<'a>,
  root: &'a AstNode<'a>,
) {
  let definitions: Vec<_> = root
    .descendants()
    .filter(|n| {
      matches!(n.data.borrow().value, NodeValue::FootnoteDefinition(_))
    })
    .collect();

  for definition in definitions {
    let name = match &definition.data.borrow().value {
      NodeValue::FootnoteDefinition(nfd) => nfd.name.clone(),
      _ => continue,
    };

    let attr = html_escape::encode_double_quoted_attribute(&name);
    let text = html_escape::encode_text(&name);
    let label: &AstNode = arena.alloc(
      NodeValue::HtmlInline(format!(
        "<sup id=\"footnote:{attr}\">{text}</sup> "
      ))
      .into(),
    );

    match definition.first_child() {
      Some(first)
        if matches!(first.data.borrow().value, NodeValue::Paragraph) =>
      {
        first.prepend(label);
      },
      _ => {
        // Empty or non-paragraph definition body: give the label its own
        // paragraph so the anchor target still exists.
        let paragraph: &AstNode = arena.alloc(NodeValue::Paragraph.into());
        paragraph.append(label);
        definition.prepend(paragraph);
      },
    }

    let children: Vec<_> = definition.children().collect();
    for child in children {
      definition.insert_before(child);
    }
    definition.detach();
  }
}

/// Rewrite footnote references into superscript anchors.
///
/// Parsed references become `<sup><a href="#footnote:ref">ref</a></sup>`.
/// References without a matching definition are reverted to literal text by
/// the parser; those are re-recognized here and rendered as dangling anchors,
/// a display-only degradation. Literal `[^ref]:` stays text, matching the
/// rule that a definition-looking marker never renders as a reference.
pub fn process_footnote_references<'a>(root: &'a AstNode<'a>) {
  for node in root.descendants() {
    let mut data = node.data.borrow_mut();
    match data.value {
      NodeValue::FootnoteReference(ref nfr) => {
        let anchor = footnote_anchor(&nfr.name);
        data.value = NodeValue::HtmlInline(anchor);
      },
      NodeValue::Text(ref t) if t.contains("[^") => {
        if let Some(rewritten) = rewrite_dangling_references(t) {
          data.value = NodeValue::HtmlInline(rewritten);
        }
      },
      _ => {},
    }
  }
}

/// Replace `[^ref]` occurrences in literal text by reference anchors,
/// escaping the surrounding text for raw HTML emission. Returns `None` when
/// nothing matched.
fn rewrite_dangling_references(text: &str) -> Option<String> {
  let mut out = String::with_capacity(text.len());
  let mut last = 0;
  let mut replaced = false;

  for caps in DANGLING_REF_RE.captures_iter(text) {
    let Some(m) = caps.get(0) else { continue };
    if text[m.end()..].starts_with(':') {
      // `[^ref]:` mid-paragraph is a failed definition, not a reference.
      continue;
    }
    out.push_str(&html_escape::encode_text(&text[last..m.start()]));
    out.push_str(&footnote_anchor(&caps[1]));
    last = m.end();
    replaced = true;
  }

  if !replaced {
    return None;
  }
  out.push_str(&html_escape::encode_text(&text[last..]));
  Some(out)
}

/// Wrap every image in a `<figure>`, appending a `<figcaption>` when the
/// image carries a non-empty title. The inner `<img>` is produced by comrak's
/// own renderer, so `src`/`alt`/`title` handling stays identical to an
/// unwrapped image.
pub fn process_captioned_images<'a>(
  root: &'a AstNode<'a>,
  options: &Options,
) {
  let images: Vec<_> = root
    .descendants()
    .filter(|n| matches!(n.data.borrow().value, NodeValue::Image(_)))
    .collect();

  for image in images {
    let title = match &image.data.borrow().value {
      NodeValue::Image(link) => link.title.clone(),
      _ => continue,
    };

    let mut img_html = String::new();
    comrak::format_html(image, options, &mut img_html).unwrap_or_default();

    let caption = if title.is_empty() {
      String::new()
    } else {
      format!("<figcaption>{}</figcaption>", html_escape::encode_text(&title))
    };

    let children: Vec<_> = image.children().collect();
    for child in children {
      child.detach();
    }
    image.data.borrow_mut().value =
      NodeValue::HtmlInline(format!("<figure>{img_html}{caption}</figure>"));
  }
}
