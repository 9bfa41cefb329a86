//! Session facade tying configuration, generation and matching together.

mod session;

pub use session::LinkGame;
