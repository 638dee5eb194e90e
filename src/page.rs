//! Composable HTML fragments. Page builders in [`crate::write`] assemble
//! these into full documents; nothing outside this module writes raw HTML
//! boilerplate. All user-supplied text goes through [`escape`] (or [`href`]
//! for URL path segments) on its way into a fragment.

use chrono::{DateTime, Utc};
use pulldown_cmark::escape::{escape_href, escape_html};

use crate::date;

/// HTML-escapes user-supplied text for element content or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Writing into a String cannot fail.
    let _ = escape_html(&mut out, text);
    out
}

/// Escapes user-supplied text for use as a URL path segment.
pub fn href(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Writing into a String cannot fail.
    let _ = escape_href(&mut out, text);
    out
}

/// The relative prefix from a page at `depth` directories below the site
/// root back up to the root. Post, tag, and category pages sit at depth 2;
/// section indices at depth 1; the home page at depth 0.
pub fn root(depth: usize) -> String {
    "../".repeat(depth)
}

/// Wraps a page body in the full HTML5 document shell: doctype, charset and
/// viewport metas, optional description meta, the shared stylesheet, site
/// navigation, `<main>`, and the footer.
pub fn document(title: &str, description: Option<&str>, nav: &str, main: &str) -> String {
    let description = match description {
        Some(text) => format!("<meta name=\"description\" content=\"{}\">\n", escape(text)),
        None => String::new(),
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
{description}<title>{title}</title>
<style>
{style}
</style>
</head>
<body>
{nav}
<main>
{main}
</main>
<footer>
<p><small>Generated with boccraft</small></p>
</footer>
</body>
</html>
"#,
        description = description,
        title = escape(title),
        style = STYLE,
        nav = nav,
        main = main,
    )
}

/// Builds the site navigation from `(href, label)` pairs.
pub fn nav(entries: &[(&str, &str)]) -> String {
    let links: Vec<String> = entries
        .iter()
        .map(|(href, label)| format!(r#"<a href="{}">{}</a>"#, href, escape(label)))
        .collect();
    format!(
        "<nav role=\"navigation\" aria-label=\"Main navigation\">\n{}\n</nav>",
        links.join("\n")
    )
}

/// Renders a date as a `<time>` element: machine-readable in the `datetime`
/// attribute, long-form for readers.
pub fn datetime(date: &DateTime<Utc>) -> String {
    format!(
        r#"<time datetime="{}">{}</time>"#,
        date::machine(date),
        date::human(date)
    )
}

/// Builds the linked tag or category list for a post. `section` is the
/// output directory (`tags` or `categories`, also the wrapper class),
/// `singular` the per-link class, and `root` the page's prefix back to the
/// site root.
pub fn term_list(root: &str, section: &str, singular: &str, names: &[String]) -> String {
    let links: String = names
        .iter()
        .map(|name| {
            format!(
                r#"<a href="{root}{section}/{href}/" class="{singular}" role="listitem">{text}</a>"#,
                root = root,
                section = section,
                href = href(name),
                singular = singular,
                text = escape(name),
            )
        })
        .collect();
    format!(
        r#"<div class="{}" role="list">{}</div>"#,
        section, links
    )
}

/// The shared stylesheet, inlined into every page. One policy stylesheet for
/// the whole site; pages do not carry bespoke CSS.
const STYLE: &str = r#":root {
    color-scheme: light dark;
}
body {
    font-family: system-ui, -apple-system, sans-serif;
    line-height: 1.6;
    max-width: 800px;
    margin: 0 auto;
    padding: 1rem;
    font-size: 16px;
}
@media (min-width: 640px) {
    body {
        padding: 2rem;
        font-size: 18px;
    }
}
nav {
    margin-bottom: 2rem;
}
nav a {
    margin-right: 1rem;
    padding: 0.5rem 0;
}
.meta {
    color: #666;
    margin-bottom: 2rem;
}
.meta-item {
    margin: 0.5rem 0;
}
.meta-label {
    display: inline-block;
    min-width: 5rem;
    color: #444;
}
.tags, .categories {
    display: inline-block;
    margin-right: 1rem;
}
.tag, .category {
    display: inline-block;
    padding: 0.2rem 0.5rem;
    margin: 0.2rem;
    background: #eee;
    border-radius: 3px;
    font-size: 0.9rem;
    transition: background-color 0.2s;
}
.tag:hover, .category:hover {
    background: #ddd;
}
.post {
    margin-bottom: 4rem;
    padding-bottom: 4rem;
    border-bottom: 1px solid #eee;
}
.post:last-child {
    border-bottom: none;
}
.post-list {
    list-style: none;
    padding: 0;
}
.post-item {
    margin-bottom: 1.5rem;
}
.post-meta {
    color: #666;
    font-size: 0.9rem;
    margin-top: 0.5rem;
}
.update-badge {
    display: inline-block;
    padding: 0.1rem 0.4rem;
    margin-left: 0.5rem;
    background: #dbeafe;
    border-radius: 3px;
    font-size: 0.8rem;
}
.updates {
    margin-top: 3rem;
    padding-top: 1rem;
    border-top: 1px solid #eee;
}
.update-item {
    margin: 1rem 0;
}
.update-date {
    font-size: 0.9rem;
    color: #666;
}
pre {
    background: #f6f8fa;
    padding: 1rem;
    border-radius: 6px;
    overflow-x: auto;
    max-width: 100%;
}
code {
    font-family: ui-monospace, monospace;
    font-size: 0.9em;
}
img {
    max-width: 100%;
    height: auto;
}
a {
    color: #0366d6;
    text-decoration: none;
}
a:hover {
    text-decoration: underline;
}
@media (prefers-color-scheme: dark) {
    body {
        background-color: #1a1a1a;
        color: #e6e6e6;
    }
    .meta, .post-meta, .update-date {
        color: #999;
    }
    .meta-label {
        color: #bbb;
    }
    .tag, .category {
        background: #333;
    }
    .tag:hover, .category:hover {
        background: #444;
    }
    .update-badge {
        background: #1e3a5f;
    }
    pre {
        background: #2d2d2d;
    }
    a {
        color: #58a6ff;
    }
    .updates {
        border-top-color: #333;
    }
    .post {
        border-bottom-color: #333;
    }
}
@media (max-width: 480px) {
    .meta-item {
        margin: 1rem 0;
    }
    .meta-label {
        display: block;
        margin-bottom: 0.25rem;
    }
}"#;
