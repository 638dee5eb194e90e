//! Converts Markdown to an HTML fragment suitable for embedding in a page's
//! content container. Parsing is structural: [`pulldown_cmark`] produces the
//! event tree and [`crate::htmlrenderer`] renders it. The only sanitization
//! step is stripping `<script>` elements from the rendered fragment.

use lazy_static::lazy_static;
use pulldown_cmark::{Options, Parser};
use regex::Regex;

use crate::htmlrenderer;

/// Converts a Markdown document into a sanitized HTML fragment.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut html = String::new();
    htmlrenderer::push_html(&mut html, Parser::new_ext(markdown, options))
        .expect("writing to a String does not fail");
    strip_scripts(&html)
}

/// Removes every `<script>...</script>` element, case-insensitive, content
/// included. Surrounding text is preserved.
fn strip_scripts(html: &str) -> String {
    lazy_static! {
        static ref SCRIPT: Regex = Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap();
    }
    SCRIPT.replace_all(html, "").into_owned()
}
