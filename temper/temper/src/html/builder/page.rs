use crate::Element;
use crate::error::Error;
use html5ever::{Attribute, parse_document};
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

// Whitespace inside these is content, so their subtree is printed on one line.
const PRESERVE_TAGS: &[&str] = &["pre", "textarea"];
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: &str, href: &str) -> Self {
        Self {
            rel: rel.to_string(),
            href: href.to_string(),
        }
    }

    pub fn stylesheet(href: &str) -> Self {
        Self::new("stylesheet", href)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script {
    pub src: String,
}

impl Script {
    pub fn new(src: &str) -> Self {
        Self {
            src: src.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageBuilder {
    lang: String,
    title: String,
    links: Vec<Link>,
    scripts: Vec<Script>,
    content: Option<Element>,
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            title: String::new(),
            links: Vec::new(),
            scripts: Vec::new(),
            content: None,
        }
    }
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lang(mut self, value: impl Into<String>) -> Self {
        self.lang = value.into();
        self
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = value.into();
        self
    }

    pub fn links(mut self, value: Vec<Link>) -> Self {
        self.links = value;
        self
    }

    pub fn link(mut self, value: Link) -> Self {
        self.links.push(value);
        self
    }

    pub fn scripts(mut self, value: Vec<Script>) -> Self {
        self.scripts = value;
        self
    }

    pub fn script(mut self, value: Script) -> Self {
        self.scripts.push(value);
        self
    }

    pub fn content(mut self, value: Element) -> Self {
        self.content = Some(value);
        self
    }

    pub fn get_lang(&self) -> &str {
        &self.lang
    }

    pub fn get_links(&self) -> &[Link] {
        &self.links
    }

    pub fn build(&self) -> Result<String, Error> {
        let links = self
            .links
            .iter()
            .map(|link| {
                format!(
                    "<link rel=\"{}\" href=\"{}\">",
                    escape_attr(&link.rel),
                    escape_attr(&link.href)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        let scripts = self
            .scripts
            .iter()
            .map(|script| format!("<script src=\"{}\" defer></script>", escape_attr(&script.src)))
            .collect::<Vec<_>>()
            .join("\n");
        let body = self
            .content
            .as_ref()
            .map(Element::render)
            .unwrap_or_default();

        let html_string = format!(
            r#"<!DOCTYPE html>
<html lang="{}">
    <head>
        <meta charset="utf-8">
        <meta name="viewport" content="width=device-width, initial-scale=1">
        {links}
        {scripts}
        <title>{}</title>
    </head>
    <body>{body}</body>
</html>"#,
            escape_attr(&self.lang),
            escape_text(&self.title),
        );

        tracing::debug!(
            lang = %self.lang,
            links = self.links.len(),
            scripts = self.scripts.len(),
            "building page"
        );
        pretty_print_html(&html_string)
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

fn render_attrs(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .map(|attr| format!(" {}=\"{}\"", attr.name.local, escape_attr(&attr.value)))
        .collect()
}

/// Prints a subtree as-is: no trimming or indentation, and no escaping for raw text.
fn inline_html_string(node: &Handle, raw_text: bool) -> String {
    match &node.data {
        NodeData::Text { contents } => {
            let contents_ref = contents.borrow();
            if raw_text {
                String::from(&**contents_ref)
            } else {
                escape_text(&contents_ref)
            }
        }
        NodeData::Element { name, attrs, .. } => {
            let tag = &*name.local;
            let mut s = format!("<{}{}>", tag, render_attrs(&attrs.borrow()));
            if VOID_TAGS.contains(&tag) {
                return s;
            }
            for child in node.children.borrow().iter() {
                s.push_str(&inline_html_string(child, raw_text));
            }
            s.push_str(&format!("</{tag}>"));
            s
        }
        _ => "".to_string(),
    }
}

fn pretty_html_string(node: &Handle, indent: usize) -> String {
    match &node.data {
        NodeData::Document => node
            .children
            .borrow()
            .iter()
            .map(|child| pretty_html_string(child, indent))
            .collect(),
        NodeData::Doctype { name, .. } => format!("<!DOCTYPE {name}>\n"),
        NodeData::Text { contents } => {
            let contents_ref = contents.borrow();
            let text = contents_ref.trim();
            if text.is_empty() {
                "".to_string()
            } else {
                format!("{}{}\n", " ".repeat(indent), escape_text(text))
            }
        }
        NodeData::Element { name, attrs, .. } => {
            let tag = &*name.local;
            let mut s = format!(
                "{}<{}{}>",
                " ".repeat(indent),
                tag,
                render_attrs(&attrs.borrow())
            );
            if VOID_TAGS.contains(&tag) {
                s.push('\n');
                return s;
            }

            let raw_text = RAW_TEXT_TAGS.contains(&tag);
            if raw_text || PRESERVE_TAGS.contains(&tag) {
                for child in node.children.borrow().iter() {
                    s.push_str(&inline_html_string(child, raw_text));
                }
                s.push_str(&format!("</{tag}>\n"));
                return s;
            }

            s.push('\n');
            for child in node.children.borrow().iter() {
                s.push_str(&pretty_html_string(child, indent + 4));
            }

            s.push_str(&format!("{}</{}>\n", " ".repeat(indent), tag));
            s
        }
        _ => "".to_string(),
    }
}

pub fn pretty_print_html(html_string: &str) -> Result<String, Error> {
    let dom: RcDom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html_string.as_bytes())?;

    Ok(pretty_html_string(&dom.document, 0))
}
