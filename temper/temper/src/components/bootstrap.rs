use crate::config::{BOOTSTRAP_CSS, TemperConfig};
use crate::error::Error;
use crate::{Element, Link, PageBuilder, Script};

/// A full HTML document with Bootstrap linked in.
///
/// Wraps a [`PageBuilder`] and forwards the parts of it a Bootstrap page needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootstrapPage {
    page: PageBuilder,
}

impl Default for BootstrapPage {
    fn default() -> Self {
        Self::new()
    }
}

impl BootstrapPage {
    pub fn new() -> Self {
        Self {
            page: PageBuilder::new().link(Link::stylesheet(BOOTSTRAP_CSS)),
        }
    }

    pub fn from_config(config: &TemperConfig) -> Self {
        let page = PageBuilder::new()
            .lang(config.page.lang.as_str())
            .title(config.page.title.as_str())
            .links(
                config
                    .page
                    .stylesheets
                    .iter()
                    .map(|href| Link::stylesheet(href))
                    .collect(),
            )
            .scripts(config.page.scripts.iter().map(|src| Script::new(src)).collect());
        Self { page }
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.page = self.page.title(value);
        self
    }

    pub fn css(mut self, href: &str) -> Self {
        self.page = self.page.link(Link::stylesheet(href));
        self
    }

    pub fn script(mut self, src: &str) -> Self {
        self.page = self.page.script(Script::new(src));
        self
    }

    pub fn body(mut self, content: Element) -> Self {
        self.page = self.page.content(content);
        self
    }

    pub fn lang(&self) -> &str {
        self.page.get_lang()
    }

    pub fn stylesheets(&self) -> impl Iterator<Item = &str> {
        self.page
            .get_links()
            .iter()
            .filter(|link| link.rel == "stylesheet")
            .map(|link| link.href.as_str())
    }

    pub fn render(&self) -> Result<String, Error> {
        self.page.build()
    }
}
