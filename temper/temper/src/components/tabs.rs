use crate::{Element, Node, a, li, ul};
use strum_macros::{Display, EnumIter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TabKind {
    Tabs,
    Pills,
}

/// `ul.nav.nav-{kind}` with every tab wrapped in `li > a[href=#]`.
///
/// The tab at index `active` gets the `active` class; an out of range index
/// leaves every tab inactive.
pub fn tabs<I, N>(kind: TabKind, active: usize, tabs: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    let items = tabs.into_iter().enumerate().map(|(index, tab)| {
        let item = li().child(a().attr("href", "#").child(tab));
        if index == active {
            item.class("active")
        } else {
            item
        }
    });

    ul().classes(&["nav", &format!("nav-{kind}")]).append(items)
}
