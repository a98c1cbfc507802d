//! Browser host - DOM wiring and the two free-running loops

mod app;
mod dom;

pub use app::SandboxApp;
pub use dom::DomBindings;
