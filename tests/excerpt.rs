use folio_commonmark::{
  DEFAULT_EXCERPT_CHARS,
  MarkdownOptions,
  MarkdownProcessor,
  extract_excerpt,
};

#[test]
fn test_excerpt_strips_formatting() {
  let result =
    extract_excerpt("This is **bold** and *italic* text", DEFAULT_EXCERPT_CHARS);
  assert_eq!(result, "This is bold and italic text");
}

#[test]
fn test_excerpt_keeps_link_text_drops_url() {
  let result = extract_excerpt(
    "Click [here](https://example.com) for more",
    DEFAULT_EXCERPT_CHARS,
  );
  assert!(result.contains("here"));
  assert!(!result.contains("https://example.com"));
  assert!(!result.contains("]("));
}

#[test]
fn test_excerpt_uses_image_alt_text() {
  let result =
    extract_excerpt("Intro ![A chart](/img/c.png) outro", DEFAULT_EXCERPT_CHARS);
  assert!(result.contains("A chart"));
  assert!(!result.contains("/img/c.png"));
}

#[test]
fn test_excerpt_includes_heading_and_code_text() {
  let result = extract_excerpt(
    "# Title\n\nUse `grep` to search\n\n```\nraw code\n```",
    DEFAULT_EXCERPT_CHARS,
  );
  assert!(result.contains("Title"));
  assert!(result.contains("grep"));
  assert!(result.contains("raw code"));
}

#[test]
fn test_excerpt_never_contains_markup() {
  let inputs = [
    "# H\n\n<div class=\"x\">raw</div>\n\nText with <span>inline</span> html",
    "Para with [link](http://a.b) and ![img](/i.png \"t\")\n\n> quote\n\n- item",
    "```mermaid\ngraph TD;\n  A --> B;\n```",
    "Broken <unclosed and **half",
  ];
  for input in inputs {
    let result = extract_excerpt(input, DEFAULT_EXCERPT_CHARS);
    assert!(
      !result.contains('<') && !result.contains('>'),
      "Markup leaked into excerpt for {input:?}: {result}"
    );
  }
}

#[test]
fn test_excerpt_is_bounded_by_input_window() {
  let long = "word ".repeat(100);
  let result = extract_excerpt(&long, DEFAULT_EXCERPT_CHARS);
  assert!(
    result.chars().count() <= DEFAULT_EXCERPT_CHARS,
    "Excerpt too long: {} chars",
    result.chars().count()
  );
}

#[test]
fn test_excerpt_truncation_may_split_constructs() {
  // Cutting at 20 chars splits the bold marker pair; the dangling marker is
  // carried as plain text, which is accepted cosmetic behavior.
  let result = extract_excerpt("Lorem ipsum dolor **sit amet** consectetur", 20);
  assert!(result.starts_with("Lorem ipsum dolor"));
  assert!(result.chars().count() <= 20);
}

#[test]
fn test_excerpt_decodes_entities() {
  let result = extract_excerpt("Fish &amp; chips", DEFAULT_EXCERPT_CHARS);
  assert_eq!(result, "Fish & chips");
}

#[test]
fn test_excerpt_collapses_whitespace() {
  let result = extract_excerpt("One\ntwo\n\nthree", DEFAULT_EXCERPT_CHARS);
  assert_eq!(result, "One two three");
}

#[test]
fn test_excerpt_respects_processor_options() {
  let processor = MarkdownProcessor::new(MarkdownOptions {
    excerpt_chars: 10,
    ..Default::default()
  });
  let result = processor.excerpt("0123456789 overflow");
  assert!(result.chars().count() <= 10);
}

#[test]
fn test_excerpt_empty_input() {
  assert_eq!(extract_excerpt("", DEFAULT_EXCERPT_CHARS), "");
}
