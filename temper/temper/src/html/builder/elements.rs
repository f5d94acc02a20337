use crate::{Element, Node};

pub const LAQUO: &str = "&laquo;";
pub const RAQUO: &str = "&raquo;";
pub const TIMES: &str = "&times;";

// Helper functions for common elements
pub fn element(tag: &str) -> Element {
    Element::new(tag)
}

pub fn void_element(tag: &str) -> Element {
    Element::new_void(tag)
}

pub fn text(value: &str) -> Node {
    Node::Text(value.to_string())
}

pub fn raw(markup: &str) -> Node {
    Node::Raw(markup.to_string())
}

pub fn button() -> Element {
    Element::new("button")
}

pub fn div() -> Element {
    Element::new("div")
}

pub fn nav() -> Element {
    Element::new("nav")
}

pub fn a() -> Element {
    Element::new("a")
}

/// `<a href>` holding a single text node.
pub fn link(href: &str, label: &str) -> Element {
    a().attr("href", href).text(label)
}

pub fn h1() -> Element {
    Element::new("h1")
}

pub fn p() -> Element {
    Element::new("p")
}

pub fn span() -> Element {
    Element::new("span")
}

pub fn form(method: &str, action: &str) -> Element {
    Element::new("form")
        .attr("method", method)
        .attr("action", action)
}

pub fn ul() -> Element {
    Element::new("ul")
}

pub fn ol() -> Element {
    Element::new("ol")
}

pub fn li() -> Element {
    Element::new("li")
}

pub fn input(input_type: &str, name: &str, value: &str) -> Element {
    Element::new_void("input")
        .attr("type", input_type)
        .attr("name", name)
        .attr("value", value)
}

pub fn textarea(name: &str, value: &str) -> Element {
    Element::new("textarea").attr("name", name).text(value)
}
