use crate::{Element, Node, li, ol, ul};

pub fn ulist_group<I, N>(children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    ul().class("list-group").append(children)
}

pub fn olist_group<I, N>(children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    ol().class("list-group").append(children)
}

pub fn list_group_item<I, N>(children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    li().class("list-group-item").append(children)
}
