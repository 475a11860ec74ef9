//! DOM crate — Document Object Model
//!
//! Page-lifetime DOM tree with attribute/class mutation and event dispatch.

pub mod event;
pub mod node;
pub mod tree;

pub use event::*;
pub use node::*;
pub use tree::Dom;
