//! The pipeline driver.
//!
//! Control flow is strictly linear: the buffer produced by each rule is the
//! input to the next. No rule consults the result of a later rule, and no
//! state is shared between rules beyond the buffer itself.

use super::rules::RULES;

/// Render Markdown source to an HTML string.
///
/// Total over all inputs: the empty string, partial syntax, and malformed
/// markers all produce *some* output. Unterminated fences and unbalanced
/// emphasis markers degrade to literal text rather than errors.
///
/// The input is never mutated; each call returns a fresh string.
///
/// # Examples
///
/// ```
/// use mdpad::render;
///
/// assert_eq!(render("# Title"), "<p><h1>Title</h1></p>");
/// assert_eq!(render("**bold**"), "<p><strong>bold</strong></p>");
/// ```
pub fn render(source: &str) -> String {
    RULES
        .iter()
        .fold(source.to_owned(), |buffer, rule| rule.apply(&buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "<p></p>");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(render("hello world"), "<p>hello world</p>");
    }

    #[test]
    fn test_unbalanced_markers_stay_literal() {
        assert_eq!(render("*dangling"), "<p>*dangling</p>");
        assert_eq!(render("`unclosed"), "<p>`unclosed</p>");
    }

    proptest! {
        /// The pipeline must never panic, whatever marker soup it is fed,
        /// and the outer paragraph wrap always holds.
        #[test]
        fn prop_render_is_total(source in r"[a-z0-9 *_#>`!\[\]().\n-]{0,200}") {
            let html = render(&source);
            prop_assert!(html.starts_with("<p>"));
            prop_assert!(html.ends_with("</p>"));
        }

        /// Text with no marker characters survives verbatim inside the
        /// paragraph wrapping.
        #[test]
        fn prop_plain_text_is_verbatim(source in "[a-z A-Z]{0,64}") {
            let html = render(&source);
            prop_assert_eq!(html, format!("<p>{source}</p>"));
        }
    }
}
