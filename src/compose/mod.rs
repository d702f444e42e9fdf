//! Composition
//!
//! Builds the preview document from the three fragments. Composition
//! is a pure function of its inputs: same fragments in, same document
//! out, no hidden state.
//!
//! Injection rules, applied in order:
//! 1. Style: a `<style>` element (isolation rules first, then the user
//!    stylesheet) is inserted before the first `</head>`. Without a
//!    `</head>`, a head section is synthesized right after the `<html ...>`
//!    open tag. Without either, the synthesized head is prepended so
//!    bare fragments still get their styling.
//! 2. Script: a `<script>` element wrapping the user script is inserted
//!    before the first `</body>`, or appended to the end of the document
//!    when there is none.
//!
//! Markup is never repaired beyond these two injections: no doctype is
//! added, duplicate or missing tags are left alone. Matching is textual
//! (see [`scan`]), so a `</head>` inside a comment or a string literal
//! is still an injection point. That trade keeps composition cheap and
//! predictable on the half-typed markup a playground sees constantly.

pub mod scan;

/// CSS reset placed ahead of the user stylesheet in every composed
/// document. Keeps the preview on an opaque white canvas no matter
/// what the embedding surface looks like.
pub const ISOLATION_RULES: &str = "html, body { background-color: #ffffff !important; opacity: 1 !important; filter: none !important; }";

/// The `<style>` element injected into the preview document.
fn style_element(css: &str) -> String {
    format!(
        "<style>\n/* Force a clean, opaque baseline ahead of user rules */\n{ISOLATION_RULES}\n{css}\n</style>"
    )
}

/// The `<script>` element injected into the preview document.
fn script_element(js: &str) -> String {
    format!("<script>{js}</script>")
}

fn insert_at(doc: &str, at: usize, block: &str) -> String {
    let mut out = String::with_capacity(doc.len() + block.len());
    out.push_str(&doc[..at]);
    out.push_str(block);
    out.push_str(&doc[at..]);
    out
}

/// Compose the three fragments into one self-contained preview document.
///
/// The markup fragment is the skeleton. The style element goes in
/// first, then the script element is placed by scanning the already
/// styled document, exactly once each.
pub fn compose(markup: &str, style: &str, script: &str) -> String {
    let style_el = style_element(style);
    let script_el = script_element(script);

    let styled = match scan::find_ci(markup, "</head>") {
        Some(at) => insert_at(markup, at, &format!("{style_el}\n")),
        None => match scan::find_open_tag(markup, "html") {
            Some(tag) => insert_at(markup, tag.end, &format!("<head>{style_el}</head>")),
            None => format!("<head>{style_el}</head>\n{markup}"),
        },
    };

    match scan::find_ci(&styled, "</body>") {
        Some(at) => insert_at(&styled, at, &format!("{script_el}\n")),
        None => {
            let mut doc = styled;
            doc.push_str(&script_el);
            doc
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.match_indices(needle).count()
    }

    const FULL_PAGE: &str = "<!doctype html>\n<html>\n<head>\n<title>t</title>\n</head>\n<body>\n<p>Hi</p>\n</body>\n</html>";

    #[test]
    fn test_compose_is_deterministic() {
        let a = compose(FULL_PAGE, "p { color: blue; }", "console.log(1);");
        let b = compose(FULL_PAGE, "p { color: blue; }", "console.log(1);");
        assert_eq!(a, b);
    }

    #[test]
    fn test_isolation_rules_present_exactly_once() {
        for markup in [FULL_PAGE, "<html><body></body></html>", "<h1>Hi</h1>", ""] {
            let doc = compose(markup, "h1 { color: red; }", "");
            assert_eq!(count(&doc, ISOLATION_RULES), 1, "markup: {markup:?}");
        }
    }

    #[test]
    fn test_style_lands_before_head_close() {
        let doc = compose(FULL_PAGE, ".x { color: red; }", "");
        let style_at = doc.find(".x { color: red; }").unwrap();
        let head_close_at = doc.find("</head>").unwrap();
        assert!(style_at < head_close_at);
        // The one existing head/body pair stays the one pair
        assert_eq!(count(&doc, "</head>"), 1);
        assert_eq!(count(&doc, "</body>"), 1);
    }

    #[test]
    fn test_script_lands_before_body_close() {
        let doc = compose(FULL_PAGE, "", "window.ready = true;");
        let script_at = doc.find("window.ready = true;").unwrap();
        let body_close_at = doc.find("</body>").unwrap();
        assert!(script_at < body_close_at);
        assert!(doc.find("<p>Hi</p>").unwrap() < script_at);
    }

    #[test]
    fn test_missing_head_synthesizes_one_after_html_open() {
        let doc = compose(
            "<html lang=\"en\"><body><p>x</p></body></html>",
            "p { margin: 0; }",
            "",
        );
        assert!(doc.starts_with("<html lang=\"en\"><head><style>"));
        assert_eq!(count(&doc, "<head>"), 1);
        assert!(doc.find("</head>").unwrap() < doc.find("<body>").unwrap());
    }

    #[test]
    fn test_missing_body_appends_script_at_end() {
        let doc = compose("<html><head></head><p>x</p></html>", "", "go();");
        assert!(doc.ends_with("<script>go();</script>"));
        // Appended after everything, including the html close
        assert!(doc.find("</html>").unwrap() < doc.find("<script>").unwrap());
    }

    #[test]
    fn test_bare_fragment_keeps_styling_and_trails_script() {
        let doc = compose("<h1>Hi</h1>", "h1 { color: red; }", "console.log(1);");
        assert!(doc.starts_with("<head><style>"));
        assert!(doc.contains("<h1>Hi</h1>"));
        assert!(doc.ends_with("<script>console.log(1);</script>"));
        assert_eq!(count(&doc, "console.log(1);"), 1);
        // Style must precede the heading it targets, user rule after the reset
        assert!(doc.find("h1 { color: red; }").unwrap() < doc.find("<h1>Hi</h1>").unwrap());
        assert!(doc.find(ISOLATION_RULES).unwrap() < doc.find("h1 { color: red; }").unwrap());
    }

    #[test]
    fn test_empty_fragments_still_compose() {
        let doc = compose("", "", "");
        assert_eq!(count(&doc, ISOLATION_RULES), 1);
        assert!(doc.starts_with("<head><style>"));
        assert!(doc.ends_with("<script></script>"));
    }

    #[test]
    fn test_injection_is_case_insensitive() {
        let doc = compose(
            "<HTML><HEAD></HEAD><BODY></BODY></HTML>",
            ".y { top: 0; }",
            "run();",
        );
        assert!(doc.find(".y { top: 0; }").unwrap() < doc.find("</HEAD>").unwrap());
        assert!(doc.find("run();").unwrap() < doc.find("</BODY>").unwrap());
    }

    #[test]
    fn test_first_head_close_wins() {
        let doc = compose("<head></head><head></head>", ".z { left: 0; }", "");
        let style_at = doc.find(".z { left: 0; }").unwrap();
        let first_close = doc.find("</head>").unwrap();
        assert!(style_at < first_close);
        // Second head untouched
        assert_eq!(count(&doc, "<style>"), 1);
    }

    #[test]
    fn test_textual_matching_sees_into_comments() {
        // Documented trade: a commented-out close tag is still the
        // first match, so the style lands inside the comment.
        let doc = compose("<!-- </head> --><head></head>", ".c { right: 0; }", "");
        let style_at = doc.find("<style>").unwrap();
        assert!(style_at < doc.find("-->").unwrap());
    }

    #[test]
    fn test_user_style_follows_isolation_rules() {
        let doc = compose(FULL_PAGE, "body { background-color: #000; }", "");
        let reset_at = doc.find(ISOLATION_RULES).unwrap();
        let user_at = doc.find("body { background-color: #000; }").unwrap();
        assert!(reset_at < user_at);
    }
}
