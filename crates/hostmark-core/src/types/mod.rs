//! Domain types shared by every crate: identifiers, categories, elements.

pub mod category;
pub mod element;
pub mod identifiers;

pub use category::Category;
pub use element::{AttributeWrite, HostElement, ReinforcementElement};
pub use identifiers::ElementId;
