//! Node create form
//!
//! - state.rs: form state and the pure reducer
//! - outline.rs: class tokens and rendered outline per state
//! - model.rs: API functions (templates, create)
//! - view_model.rs: signals, dispatch and commands
//! - view.rs: Leptos component (pure UI)

mod model;
pub mod outline;
pub mod state;
mod view;
mod view_model;

pub use view::NodeCreate;
