//! Renders [`pulldown_cmark`] events into an HTML fragment. This is modeled
//! after [`pulldown_cmark`]'s private `HtmlWriter` struct, with one rendering
//! rule per node kind so nested constructs (emphasis inside a link, inline
//! code inside a list item) compose correctly. Heading markers map straight
//! onto `<h1>`..`<h6>`; post pages embed the fragment below their own title.

use pulldown_cmark::escape::{escape_href, escape_html, StrWrite};
use pulldown_cmark::{Alignment, CodeBlockKind, CowStr, Event, Tag};
use std::io;

enum TableState {
    Head,
    Body,
}

struct HtmlRenderer {
    table_alignments: Vec<Alignment>,
    table_state: TableState,
    table_cell_index: usize,
}

impl<'a> HtmlRenderer {
    fn new() -> Self {
        HtmlRenderer {
            table_alignments: Vec::default(),
            table_state: TableState::Head,
            table_cell_index: 0,
        }
    }

    fn on_event<W: StrWrite>(&mut self, w: &mut W, event: Event<'a>) -> io::Result<()> {
        match event {
            Event::Start(tag) => self.on_start(w, tag),
            Event::End(tag) => self.on_end(w, tag),
            Event::Text(text) => escape_html(w, &text),
            Event::Code(code) => self.on_code(w, code),
            Event::Html(html) => w.write_str(&html),
            Event::SoftBreak => w.write_str("\n"),
            Event::HardBreak => w.write_str("<br>"),
            Event::Rule => w.write_str("<hr>"),
            Event::FootnoteReference(name) => {
                write!(w, r##"<sup class="footnote-reference"><a href="#{}">{}</a></sup>"##, name, name)
            }
            Event::TaskListMarker(checked) => write!(
                w,
                r#"<input disabled="" type="checkbox"{}>"#,
                match checked {
                    true => r#" checked="""#,
                    false => "",
                }
            ),
        }
    }

    fn on_start<W: StrWrite>(&mut self, w: &mut W, tag: Tag<'a>) -> io::Result<()> {
        match tag {
            Tag::Paragraph => w.write_str("<p>"),
            Tag::Heading(level) => write!(w, "<h{}>", level),
            Tag::BlockQuote => w.write_str("<blockquote>"),
            Tag::CodeBlock(kind) => match kind {
                CodeBlockKind::Fenced(info) => {
                    match info.split(' ').next().unwrap_or("") {
                        "" => w.write_str("<pre><code>"),
                        lang => write!(w, r#"<pre><code class="language-{}">"#, lang),
                    }
                }
                CodeBlockKind::Indented => w.write_str("<pre><code>"),
            },
            Tag::List(None) => w.write_str("<ul>"),
            Tag::List(Some(1)) => w.write_str("<ol>"),
            Tag::List(Some(start)) => write!(w, r#"<ol start="{}">"#, start),
            Tag::Item => w.write_str("<li>"),
            Tag::Emphasis => w.write_str("<em>"),
            Tag::Strong => w.write_str("<strong>"),
            Tag::Strikethrough => w.write_str("<del>"),
            Tag::Link(_link_type, dest, title) => {
                w.write_str("<a href=\"")?;
                escape_href(&mut *w, &dest)?;
                if !title.is_empty() {
                    w.write_str("\" title=\"")?;
                    escape_html(&mut *w, &title)?;
                }
                w.write_str("\">")
            }
            Tag::Image(_link_type, dest, title) => {
                w.write_str("<img src=\"")?;
                escape_href(&mut *w, &dest)?;
                w.write_str("\" alt=\"\"")?;
                if !title.is_empty() {
                    w.write_str(" title=\"")?;
                    escape_html(&mut *w, &title)?;
                    w.write_str("\"")?;
                }
                w.write_str(">")
            }
            Tag::FootnoteDefinition(name) => {
                w.write_str("<div class=\"footnote-definition\" id=\"")?;
                escape_html(&mut *w, &name)?;
                w.write_str("\">")?;
                escape_html(&mut *w, &name)?;
                w.write_str(". ")
            }
            Tag::Table(alignments) => {
                self.table_alignments = alignments;
                w.write_str("<table>")
            }
            Tag::TableHead => {
                self.table_state = TableState::Head;
                self.table_cell_index = 0;
                w.write_str("<thead><tr>")
            }
            Tag::TableRow => {
                self.table_cell_index = 0;
                w.write_str("<tr>")
            }
            Tag::TableCell => write!(
                w,
                "<{}{}>",
                match self.table_state {
                    TableState::Head => "th",
                    TableState::Body => "td",
                },
                match self.table_alignments.get(self.table_cell_index) {
                    Some(Alignment::Left) => r#" align="left""#,
                    Some(Alignment::Right) => r#" align="right""#,
                    Some(Alignment::Center) => r#" align="center""#,
                    _ => "",
                }
            ),
        }
    }

    fn on_end<W: StrWrite>(&mut self, w: &mut W, tag: Tag) -> io::Result<()> {
        match tag {
            Tag::Paragraph => w.write_str("</p>"),
            Tag::Heading(level) => write!(w, "</h{}>", level),
            Tag::BlockQuote => w.write_str("</blockquote>"),
            Tag::CodeBlock(_) => w.write_str("</code></pre>"),
            Tag::List(None) => w.write_str("</ul>"),
            Tag::List(Some(_)) => w.write_str("</ol>"),
            Tag::Item => w.write_str("</li>"),
            Tag::Emphasis => w.write_str("</em>"),
            Tag::Strong => w.write_str("</strong>"),
            Tag::Strikethrough => w.write_str("</del>"),
            Tag::Link(_, _, _) => w.write_str("</a>"),
            Tag::Image(_, _, _) => Ok(()), // handled in on_start
            Tag::FootnoteDefinition(_) => w.write_str("</div>"),
            Tag::Table(_) => w.write_str("</tbody></table>"),
            Tag::TableHead => {
                self.table_state = TableState::Body;
                w.write_str("</tr></thead><tbody>")
            }
            Tag::TableRow => w.write_str("</tr>"),
            Tag::TableCell => {
                self.table_cell_index += 1;
                w.write_str(match self.table_state {
                    TableState::Head => "</th>",
                    TableState::Body => "</td>",
                })
            }
        }
    }

    fn on_code<W: StrWrite>(&mut self, w: &mut W, code: CowStr) -> io::Result<()> {
        w.write_str("<code>")?;
        escape_html(&mut *w, &code)?;
        w.write_str("</code>")
    }
}

/// Renders a stream of [`Event`]s into `out` as an HTML fragment.
pub fn push_html<'a, I>(out: &mut String, events: I) -> io::Result<()>
where
    I: Iterator<Item = Event<'a>>,
{
    let mut renderer = HtmlRenderer::new();
    for event in events {
        renderer.on_event(out, event)?;
    }
    Ok(())
}
