use crate::{Element, Node, button as plain_button, div, p, span};

pub fn input(input_type: &str, name: &str, value: &str) -> Element {
    crate::input(input_type, name, value).class("form-control")
}

pub fn textarea(name: &str, value: &str) -> Element {
    crate::textarea(name, value).class("form-control")
}

pub fn button<I, N>(is_default: bool, children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    let btn = plain_button().class("btn");
    let btn = if is_default {
        btn.class("btn-default")
    } else {
        btn
    };
    btn.append(children)
}

pub fn glyphicon(name: &str) -> Element {
    span().classes(&["glyphicon", &format!("glyphicon-{name}")])
}

pub fn input_group_btn<I, N>(children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    span().class("input-group-btn").append(children)
}

pub fn form_group<I, N>(children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    div().class("form-group").append(children)
}

pub fn help_block<I, N>(children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    p().class("help-block").append(children)
}
