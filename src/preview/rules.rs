//! The rewrite rule table.
//!
//! Each rule is one pattern substitution applied to the whole buffer. The
//! table is compiled once on first use and never mutated; the driver in
//! [`super::pipeline`] applies the rules strictly in order.

use once_cell::sync::Lazy;
use regex::Regex;

/// How a rule's pattern matches against the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    /// Anchored per line: headings, list items, blockquotes, rules.
    Line,
    /// Spans may cross line breaks: fenced code.
    Block,
    /// Plain global substitution over the whole buffer: inline spans.
    Document,
}

/// What to do with the matched text.
pub(crate) enum Rewrite {
    /// Replace every match with a capture-group template.
    Template(&'static str),
    /// Stages that need more than template substitution (list container
    /// wrapping, the final paragraph wrap).
    Custom(fn(&Regex, &str) -> String),
}

/// A single substitution step.
pub(crate) struct RewriteRule {
    pattern: Regex,
    rewrite: Rewrite,
}

impl RewriteRule {
    fn new(scope: Scope, pattern: &str, rewrite: Rewrite) -> Self {
        let pattern = match scope {
            Scope::Line => format!("(?m){pattern}"),
            Scope::Block => format!("(?s){pattern}"),
            Scope::Document => pattern.to_owned(),
        };
        Self {
            pattern: Regex::new(&pattern).expect("rewrite pattern must compile"),
            rewrite,
        }
    }

    /// Apply this rule, returning the rewritten buffer.
    pub(crate) fn apply(&self, text: &str) -> String {
        match self.rewrite {
            Rewrite::Template(template) => self.pattern.replace_all(text, template).into_owned(),
            Rewrite::Custom(f) => f(&self.pattern, text),
        }
    }
}

/// The rule table, in application order.
pub(crate) static RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        // Headings, longest marker first.
        RewriteRule::new(
            Scope::Line,
            r"^### (.*)$",
            Rewrite::Template("<h3>$1</h3>"),
        ),
        RewriteRule::new(Scope::Line, r"^## (.*)$", Rewrite::Template("<h2>$1</h2>")),
        RewriteRule::new(Scope::Line, r"^# (.*)$", Rewrite::Template("<h1>$1</h1>")),
        // Strong emphasis before emphasis.
        RewriteRule::new(
            Scope::Document,
            r"\*\*(.*?)\*\*",
            Rewrite::Template("<strong>$1</strong>"),
        ),
        RewriteRule::new(
            Scope::Document,
            r"__(.*?)__",
            Rewrite::Template("<strong>$1</strong>"),
        ),
        RewriteRule::new(
            Scope::Document,
            r"\*(.*?)\*",
            Rewrite::Template("<em>$1</em>"),
        ),
        RewriteRule::new(Scope::Document, r"_(.*?)_", Rewrite::Template("<em>$1</em>")),
        // Fenced code before inline code. The fence pair may enclose line
        // breaks; the info string stays inside the emitted block.
        RewriteRule::new(
            Scope::Block,
            r"```(.*?)```",
            Rewrite::Template("<pre><code>$1</code></pre>"),
        ),
        RewriteRule::new(
            Scope::Document,
            r"`([^`]+)`",
            Rewrite::Template("<code>$1</code>"),
        ),
        // Images before links: `[alt](url)` is a strict substring of the
        // image syntax.
        RewriteRule::new(
            Scope::Document,
            r"!\[([^\]]*)\]\(([^)]+)\)",
            Rewrite::Template(r#"<img src="$2" alt="$1" />"#),
        ),
        RewriteRule::new(
            Scope::Document,
            r"\[([^\]]+)\]\(([^)]+)\)",
            Rewrite::Template(r#"<a href="$2" target="_blank">$1</a>"#),
        ),
        // List items. Each stage converts its marker lines and wraps every
        // contiguous run of converted items in its own container, so runs
        // produced by the other stage are left alone.
        RewriteRule::new(Scope::Line, r"^[*-] (.*)$", Rewrite::Custom(unordered_lists)),
        RewriteRule::new(Scope::Line, r"^\d+\. (.*)$", Rewrite::Custom(ordered_lists)),
        // Blockquotes, one line at a time.
        RewriteRule::new(
            Scope::Line,
            r"^> (.*)$",
            Rewrite::Template("<blockquote>$1</blockquote>"),
        ),
        RewriteRule::new(
            Scope::Line,
            r"^(?:---|\*\*\*)$",
            Rewrite::Template("<hr />"),
        ),
        // Paragraph wrapping runs last, over the transformed buffer.
        RewriteRule::new(Scope::Document, r"\n\n", Rewrite::Custom(paragraphs)),
    ]
});

fn unordered_lists(pattern: &Regex, text: &str) -> String {
    wrap_list_items(pattern, text, "<ul>", "</ul>")
}

fn ordered_lists(pattern: &Regex, text: &str) -> String {
    wrap_list_items(pattern, text, "<ol>", "</ol>")
}

/// Convert marker lines to `<li>` elements and wrap each contiguous run of
/// converted items in a list container.
fn wrap_list_items(pattern: &Regex, text: &str, open: &str, close: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut run: Vec<String> = Vec::new();

    for line in text.split('\n') {
        if let Some(caps) = pattern.captures(line) {
            run.push(format!("<li>{}</li>", &caps[1]));
        } else {
            flush_run(&mut out, &mut run, open, close);
            out.push(line.to_owned());
        }
    }
    flush_run(&mut out, &mut run, open, close);

    out.join("\n")
}

fn flush_run(out: &mut Vec<String>, run: &mut Vec<String>, open: &str, close: &str) {
    if run.is_empty() {
        return;
    }
    out.push(format!("{open}{}{close}", run.join("\n")));
    run.clear();
}

/// Every double line-break becomes a paragraph boundary; the whole buffer is
/// wrapped in one outer paragraph.
fn paragraphs(pattern: &Regex, text: &str) -> String {
    format!("<p>{}</p>", pattern.replace_all(text, "</p><p>"))
}
