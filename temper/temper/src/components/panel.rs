use crate::{Element, Node, div};
use strum_macros::{Display, EnumIter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PanelState {
    Default,
    Primary,
    Success,
    Info,
    Warning,
    Danger,
}

pub fn panel<I, N>(state: PanelState, children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    div()
        .classes(&["panel", &format!("panel-{state}")])
        .append(children)
}

pub fn panel_heading<I, N>(children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    div().class("panel-heading").append(children)
}

pub fn panel_body<I, N>(children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    div().class("panel-body").append(children)
}

pub fn page_header<I, N>(children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    div().class("page-header").append(children)
}
