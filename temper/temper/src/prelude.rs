pub use crate::components::form;
pub use crate::components::{
    AlertKind, BootstrapPage, ColumnSize, Fixed, NavEntry, Navbar, PageLink, PageLinkKind, Pager,
    PanelState, TabKind, alert, col, container, form_group, glyphicon, help_block,
    input_group_btn, list_group_item, olist_group, page_header, paginate, pagination, panel,
    panel_body, panel_heading, render_pagination, row, tabs, ulist_group,
};
pub use crate::config::{PageConfig, PaginationConfig, TemperConfig};
pub use crate::error::{ConfigError, Error, PaginationError};
pub use crate::html::{
    Element, LAQUO, Link, Node, PageBuilder, RAQUO, Script, TIMES, a, div, h1, li, link, nav, p,
    raw, span, text, ul,
};
