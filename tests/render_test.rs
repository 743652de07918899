//! Rendering pipeline tests.
//!
//! Black-box tests for `render` - one section per construct, plus the
//! cross-rule ordering interactions and graceful degradation on malformed
//! input.

use mdpad::{render, Workspace};

// ============================================================================
// Paragraph Wrapping
// ============================================================================

#[test]
fn test_empty_string_renders_to_empty_paragraph() {
    assert_eq!(render(""), "<p></p>");
}

#[test]
fn test_plain_text_is_wrapped_verbatim() {
    assert_eq!(render("just some text"), "<p>just some text</p>");
}

#[test]
fn test_blank_line_splits_paragraphs() {
    assert_eq!(render("one\n\ntwo"), "<p>one</p><p>two</p>");
}

#[test]
fn test_single_newline_does_not_split() {
    assert_eq!(render("one\ntwo"), "<p>one\ntwo</p>");
}

// ============================================================================
// Headings
// ============================================================================

#[test]
fn test_heading_levels() {
    assert_eq!(render("# Title"), "<p><h1>Title</h1></p>");
    assert_eq!(render("## Title"), "<p><h2>Title</h2></p>");
    assert_eq!(render("### Title"), "<p><h3>Title</h3></p>");
}

#[test]
fn test_longest_heading_marker_wins() {
    // The `#` rule must not swallow `###` lines.
    assert_eq!(render("### T"), "<p><h3>T</h3></p>");
    assert_eq!(render("## T"), "<p><h2>T</h2></p>");
}

#[test]
fn test_heading_marker_only_matches_at_line_start() {
    assert_eq!(render("not a # heading"), "<p>not a # heading</p>");
}

#[test]
fn test_heading_content_keeps_inline_formatting() {
    assert_eq!(
        render("# Hello **world**"),
        "<p><h1>Hello <strong>world</strong></h1></p>"
    );
}

// ============================================================================
// Emphasis
// ============================================================================

#[test]
fn test_strong_emphasis() {
    let html = render("**bold**");
    assert_eq!(html, "<p><strong>bold</strong></p>");
    assert!(!html.contains('*'));
}

#[test]
fn test_strong_emphasis_underscores() {
    assert_eq!(render("__bold__"), "<p><strong>bold</strong></p>");
}

#[test]
fn test_emphasis() {
    assert_eq!(render("*em*"), "<p><em>em</em></p>");
    assert_eq!(render("_em_"), "<p><em>em</em></p>");
}

#[test]
fn test_strong_runs_before_emphasis() {
    // `**x**` must not degrade into italic-within-italic.
    assert_eq!(
        render("**bold** and *em*"),
        "<p><strong>bold</strong> and <em>em</em></p>"
    );
}

#[test]
fn test_unpaired_emphasis_marker_stays_literal() {
    assert_eq!(render("a * b"), "<p>a * b</p>");
}

// ============================================================================
// Code
// ============================================================================

#[test]
fn test_inline_code() {
    assert_eq!(render("`code`"), "<p><code>code</code></p>");
}

#[test]
fn test_fenced_code_block_spans_lines() {
    assert_eq!(
        render("```js\ncode\n```"),
        "<p><pre><code>js\ncode\n</code></pre></p>"
    );
}

#[test]
fn test_fence_is_not_broken_into_inline_code() {
    let html = render("```\nlet x = 1;\n```");
    assert!(html.contains("<pre><code>"));
    assert!(!html.contains("<code></code>"));
}

#[test]
fn test_unterminated_fence_stays_literal() {
    assert_eq!(render("```\ncode"), "<p>```\ncode</p>");
}

// ============================================================================
// Images and Links
// ============================================================================

#[test]
fn test_image() {
    assert_eq!(
        render("![alt](u)"),
        "<p><img src=\"u\" alt=\"alt\" /></p>"
    );
}

#[test]
fn test_image_is_not_also_a_link() {
    let html = render("![alt](u)");
    assert!(!html.contains("<a "));
}

#[test]
fn test_image_with_empty_alt() {
    assert_eq!(render("![](u)"), "<p><img src=\"u\" alt=\"\" /></p>");
}

#[test]
fn test_link_opens_new_context() {
    assert_eq!(
        render("[text](u)"),
        "<p><a href=\"u\" target=\"_blank\">text</a></p>"
    );
}

#[test]
fn test_image_and_link_in_one_line() {
    assert_eq!(
        render("![a](u) and [t](v)"),
        "<p><img src=\"u\" alt=\"a\" /> and <a href=\"v\" target=\"_blank\">t</a></p>"
    );
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn test_unordered_list_run_shares_one_container() {
    assert_eq!(
        render("* a\n* b"),
        "<p><ul><li>a</li>\n<li>b</li></ul></p>"
    );
}

#[test]
fn test_dash_marker_lists() {
    assert_eq!(
        render("- a\n- b"),
        "<p><ul><li>a</li>\n<li>b</li></ul></p>"
    );
}

#[test]
fn test_separate_unordered_runs_get_separate_containers() {
    assert_eq!(
        render("* a\n\ntext\n\n* b"),
        "<p><ul><li>a</li></ul></p><p>text</p><p><ul><li>b</li></ul></p>"
    );
}

#[test]
fn test_ordered_list_run_shares_one_container() {
    assert_eq!(
        render("1. a\n2. b"),
        "<p><ol><li>a</li>\n<li>b</li></ol></p>"
    );
}

#[test]
fn test_adjacent_list_kinds_stay_separate() {
    assert_eq!(
        render("* a\n1. b"),
        "<p><ul><li>a</li></ul>\n<ol><li>b</li></ol></p>"
    );
}

#[test]
fn test_list_items_keep_inline_formatting() {
    assert_eq!(
        render("* **bold** item"),
        "<p><ul><li><strong>bold</strong> item</li></ul></p>"
    );
}

// ============================================================================
// Blockquotes and Horizontal Rules
// ============================================================================

#[test]
fn test_blockquote() {
    assert_eq!(render("> quote"), "<p><blockquote>quote</blockquote></p>");
}

#[test]
fn test_consecutive_quote_lines_stay_separate() {
    assert_eq!(
        render("> a\n> b"),
        "<p><blockquote>a</blockquote>\n<blockquote>b</blockquote></p>"
    );
}

#[test]
fn test_horizontal_rule() {
    assert_eq!(render("---"), "<p><hr /></p>");
}

#[test]
fn test_asterisk_horizontal_rule_is_shadowed_by_emphasis() {
    // The emphasis rule runs first and eats the first two asterisks, so a
    // `***` line never reaches the horizontal-rule rule.
    assert_eq!(render("***"), "<p><em></em>*</p>");
}

#[test]
fn test_dashes_with_text_are_not_a_rule() {
    assert_eq!(render("--- x"), "<p>--- x</p>");
}

// ============================================================================
// Whole Documents
// ============================================================================

#[test]
fn test_welcome_document_renders_every_construct() {
    let workspace = Workspace::new();
    let html = render(&workspace.current().content);

    assert!(html.contains("<h1>Welcome</h1>"));
    assert!(html.contains("<h2>Features</h2>"));
    assert!(html.contains("<h3>Getting Started</h3>"));
    assert!(html.contains("<ul><li>Multiple files</li>"));
    assert!(html.contains("<strong>Markdown</strong>"));
    assert!(html.contains("<pre><code>"));
    assert!(html.contains("<blockquote>This is a blockquote</blockquote>"));
    assert!(html.starts_with("<p>"));
    assert!(html.ends_with("</p>"));
}

#[test]
fn test_mixed_document() {
    let source = "# Doc\n\nIntro with [a link](https://example.com).\n\n> note\n\n---";
    let html = render(source);

    assert!(html.contains("<h1>Doc</h1>"));
    assert!(html.contains("<a href=\"https://example.com\" target=\"_blank\">a link</a>"));
    assert!(html.contains("<blockquote>note</blockquote>"));
    assert!(html.contains("<hr />"));
}
