//! UI components for the landing page.

mod app;
mod footer;
mod header;
mod page;
mod sections;
mod splash;

pub use app::*;
pub use footer::*;
pub use header::*;
pub use page::*;
pub use sections::*;
pub use splash::*;
