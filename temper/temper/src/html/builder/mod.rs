pub mod element;
pub mod elements;
pub mod page;

pub use element::*;
pub use elements::*;
pub use page::*;
