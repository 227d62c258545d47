mod pipeline;
mod stage;

pub use pipeline::Pipeline;
pub use stage::{Redirect, RedirectMode, Stage};
