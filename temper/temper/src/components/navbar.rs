use crate::{Element, container, div, form, li, link, nav, ul};
use strum_macros::EnumIter;

/// Viewport pinning of the navbar.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, EnumIter)]
pub enum Fixed {
    #[default]
    None,
    Top,
    Bottom,
}

impl Fixed {
    pub fn class(self) -> Option<&'static str> {
        match self {
            Fixed::None => None,
            Fixed::Top => Some("navbar-fixed-top"),
            Fixed::Bottom => Some("navbar-fixed-bottom"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub element: Element,
    pub active: bool,
}

/// Accumulates navbar configuration; [`Navbar::render`] turns it into a `<nav>` tree.
///
/// The brand header always precedes the entry lists, whatever order the
/// builder methods were called in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navbar {
    inverse: bool,
    fixed: Fixed,
    brand: Option<Element>,
    left: Vec<NavEntry>,
    right: Vec<Element>,
}

impl Navbar {
    pub fn new(inverse: bool) -> Self {
        Self {
            inverse,
            ..Self::default()
        }
    }

    pub fn inverse_color(mut self, value: bool) -> Self {
        self.inverse = value;
        self
    }

    pub fn fixed(mut self, value: Fixed) -> Self {
        self.fixed = value;
        self
    }

    pub fn fixed_top(self) -> Self {
        self.fixed(Fixed::Top)
    }

    pub fn fixed_bottom(self) -> Self {
        self.fixed(Fixed::Bottom)
    }

    pub fn brand(mut self, value: Element) -> Self {
        self.brand = Some(value);
        self
    }

    pub fn left(mut self, active: bool, element: Element) -> Self {
        self.left.push(NavEntry { element, active });
        self
    }

    pub fn left_link(self, active: bool, href: &str, text: &str) -> Self {
        self.left(active, link(href, text))
    }

    pub fn right(mut self, element: Element) -> Self {
        self.right.push(element);
        self
    }

    pub fn right_link(self, href: &str, text: &str) -> Self {
        self.right(link(href, text))
    }

    pub fn right_text(self, text: &str) -> Self {
        self.right(div().class("navbar-text").text(text))
    }

    /// A `form.navbar-form`, meant to be passed to [`Navbar::left`] or [`Navbar::right`].
    pub fn form<I, N>(method: &str, action: &str, children: I) -> Element
    where
        I: IntoIterator<Item = N>,
        N: Into<crate::Node>,
    {
        form(method, action).class("navbar-form").append(children)
    }

    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    pub fn fixed_mode(&self) -> Fixed {
        self.fixed
    }

    pub fn left_entries(&self) -> &[NavEntry] {
        &self.left
    }

    pub fn right_entries(&self) -> &[Element] {
        &self.right
    }

    pub fn render(&self) -> Element {
        tracing::debug!(
            inverse = self.inverse,
            fixed = ?self.fixed,
            brand = self.brand.is_some(),
            left = self.left.len(),
            right = self.right.len(),
            "rendering navbar"
        );

        let mut root = nav()
            .class("navbar")
            .class(if self.inverse {
                "navbar-inverse"
            } else {
                "navbar-default"
            });
        if let Some(class) = self.fixed.class() {
            root = root.class(class);
        }

        let header = self
            .brand
            .clone()
            .map(|brand| div().class("navbar-header").child(brand.class("navbar-brand")));

        root.child(
            container(true, std::iter::empty::<Element>())
                .child_opt(header)
                .child_opt(self.collapse()),
        )
    }

    fn collapse(&self) -> Option<Element> {
        if self.left.is_empty() && self.right.is_empty() {
            return None;
        }

        let left = (!self.left.is_empty()).then(|| {
            ul().classes(&["nav", "navbar-nav"])
                .append(self.left.iter().map(|entry| {
                    let item = li().child(entry.element.clone());
                    if entry.active {
                        item.class("active")
                    } else {
                        item
                    }
                }))
        });

        let right = (!self.right.is_empty()).then(|| {
            ul().classes(&["nav", "navbar-nav", "navbar-right"])
                .append(self.right.iter().map(|element| li().child(element.clone())))
        });

        Some(
            div()
                .classes(&["collapse", "navbar-collapse"])
                .child_opt(left)
                .child_opt(right),
        )
    }
}

impl From<&Navbar> for Element {
    fn from(value: &Navbar) -> Self {
        value.render()
    }
}
