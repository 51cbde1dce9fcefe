//! UI components for the portfolio site.

mod app;
mod experience;
mod footer;
mod hero;
mod links;
mod navigation;
mod projects;
mod section;
mod skills;
mod splash;

pub use app::*;
pub use experience::*;
pub use footer::*;
pub use hero::*;
pub use links::*;
pub use navigation::*;
pub use projects::*;
pub use section::*;
pub use skills::*;
pub use splash::*;
