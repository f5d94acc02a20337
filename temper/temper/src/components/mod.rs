pub mod alert;
pub mod bootstrap;
pub mod form;
pub mod grid;
pub mod list_group;
pub mod navbar;
pub mod pagination;
pub mod panel;
pub mod tabs;

pub use alert::*;
pub use bootstrap::*;
pub use form::{form_group, glyphicon, help_block, input_group_btn};
pub use grid::*;
pub use list_group::*;
pub use navbar::*;
pub use pagination::*;
pub use panel::*;
pub use tabs::*;
