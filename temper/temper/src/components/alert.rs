use crate::{Element, Node, TIMES, button, div, span};
use strum_macros::{Display, EnumIter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum AlertKind {
    Success,
    Info,
    Warning,
    Danger,
}

pub fn alert<I, N>(kind: AlertKind, dismissible: bool, children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    let alert = div()
        .classes(&["alert", &format!("alert-{kind}")])
        .attr("role", "alert");

    let alert = if dismissible {
        alert.class("alert-dismissible").child(close_button())
    } else {
        alert
    };

    alert.append(children)
}

fn close_button() -> Element {
    button()
        .class("close")
        .attr("data-dismiss", "alert")
        .attr("aria-label", "Close")
        .child(span().attr("aria-hidden", "true").raw(TIMES))
}
