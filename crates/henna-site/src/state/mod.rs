//! State management for the landing page.

pub mod drawer;
pub mod page_state;
pub mod reveal;
pub mod splash;

pub use drawer::*;
pub use page_state::*;
pub use reveal::*;
pub use splash::*;
