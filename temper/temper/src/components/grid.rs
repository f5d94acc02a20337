use crate::{Element, Node, div};
use strum_macros::{Display, EnumIter};

/// Bootstrap grid breakpoint, rendered as the `xs`/`sm`/`md`/`lg` class infix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ColumnSize {
    Xs,
    Sm,
    Md,
    Lg,
}

pub fn container<I, N>(fluid: bool, children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    let class = if fluid { "container-fluid" } else { "container" };
    div().class(class).append(children)
}

pub fn row<I, N>(children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    div().class("row").append(children)
}

/// `div.col-{size}-{span}`.
pub fn col<I, N>(span: u8, size: ColumnSize, children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    div().class(&format!("col-{size}-{span}")).append(children)
}
