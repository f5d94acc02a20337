//! Page-number navigation.
//!
//! [`paginate`] computes the window of links around the current page and
//! [`render_pagination`] turns the result into a Bootstrap `ul.pagination`.

use crate::config::PaginationConfig;
use crate::error::PaginationError;
use crate::{Element, LAQUO, RAQUO, a, li, span, ul};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PageLinkKind {
    Previous,
    Page(u32),
    Current(u32),
    Next,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub kind: PageLinkKind,
    pub href: String,
}

impl PageLink {
    fn new(kind: PageLinkKind, href: String) -> Self {
        Self { kind, href }
    }

    /// Page number for numbered and current links.
    pub fn page(&self) -> Option<u32> {
        match self.kind {
            PageLinkKind::Page(n) | PageLinkKind::Current(n) => Some(n),
            PageLinkKind::Previous | PageLinkKind::Next => None,
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self.kind, PageLinkKind::Current(_))
    }

    /// True for the previous/next arrows.
    pub fn is_navigational(&self) -> bool {
        matches!(self.kind, PageLinkKind::Previous | PageLinkKind::Next)
    }

    pub fn label(&self) -> String {
        match self.kind {
            PageLinkKind::Previous => "«".to_string(),
            PageLinkKind::Next => "»".to_string(),
            PageLinkKind::Page(n) | PageLinkKind::Current(n) => n.to_string(),
        }
    }

    pub fn render(&self) -> Element {
        match self.kind {
            PageLinkKind::Previous => li().child(a().attr("href", &self.href).raw(LAQUO)),
            PageLinkKind::Next => li().child(a().attr("href", &self.href).raw(RAQUO)),
            PageLinkKind::Page(n) => {
                li().child(a().attr("href", &self.href).text(&n.to_string()))
            }
            PageLinkKind::Current(n) => li().class("active").child(
                a().attr("href", &self.href)
                    .text(&n.to_string())
                    .child(span().class("sr-only").text("(current)")),
            ),
        }
    }
}

/// Links around `current_page`: previous, left window, current, right window, next.
///
/// `url` is called once for every emitted link except the current one, which
/// points at `#`. Requests with a zero page, zero total or a current page past
/// the last one are rejected.
pub fn paginate<F>(
    url: F,
    current_page: u32,
    total_pages: u32,
    max_left: u32,
    max_right: u32,
) -> Result<Vec<PageLink>, PaginationError>
where
    F: Fn(u32) -> String,
{
    if current_page == 0 {
        return Err(PaginationError::ZeroPage);
    }
    if total_pages == 0 {
        return Err(PaginationError::NoPages);
    }
    if current_page > total_pages {
        return Err(PaginationError::PageOutOfRange {
            current: current_page,
            total: total_pages,
        });
    }

    let mut links = Vec::new();

    if current_page > 1 {
        links.push(PageLink::new(PageLinkKind::Previous, url(current_page - 1)));

        let first = current_page.saturating_sub(max_left).max(1);
        links.extend((first..current_page).map(|i| PageLink::new(PageLinkKind::Page(i), url(i))));
    }

    links.push(PageLink::new(
        PageLinkKind::Current(current_page),
        "#".to_string(),
    ));

    if current_page < total_pages {
        let last = current_page.saturating_add(max_right).min(total_pages);
        links.extend(
            (current_page + 1..=last).map(|i| PageLink::new(PageLinkKind::Page(i), url(i))),
        );

        links.push(PageLink::new(PageLinkKind::Next, url(current_page + 1)));
    }

    tracing::trace!(
        current_page,
        total_pages,
        max_left,
        max_right,
        links = links.len(),
        "paginated"
    );
    Ok(links)
}

pub fn render_pagination(links: &[PageLink]) -> Element {
    ul().class("pagination")
        .append(links.iter().map(PageLink::render))
}

/// [`paginate`] followed by [`render_pagination`].
pub fn pagination<F>(
    url: F,
    current_page: u32,
    total_pages: u32,
    max_left: u32,
    max_right: u32,
) -> Result<Element, PaginationError>
where
    F: Fn(u32) -> String,
{
    let links = paginate(url, current_page, total_pages, max_left, max_right)?;
    Ok(render_pagination(&links))
}

/// Window sizes kept around for repeated pagination, usually from config.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Pager {
    config: PaginationConfig,
}

impl Pager {
    pub fn new(max_left: u32, max_right: u32) -> Self {
        Self {
            config: PaginationConfig {
                max_left,
                max_right,
            },
        }
    }

    pub fn from_config(config: &PaginationConfig) -> Self {
        Self { config: *config }
    }

    pub fn links<F>(
        &self,
        url: F,
        current_page: u32,
        total_pages: u32,
    ) -> Result<Vec<PageLink>, PaginationError>
    where
        F: Fn(u32) -> String,
    {
        paginate(
            url,
            current_page,
            total_pages,
            self.config.max_left,
            self.config.max_right,
        )
    }

    pub fn render<F>(
        &self,
        url: F,
        current_page: u32,
        total_pages: u32,
    ) -> Result<Element, PaginationError>
    where
        F: Fn(u32) -> String,
    {
        self.links(url, current_page, total_pages)
            .map(|links| render_pagination(&links))
    }
}
