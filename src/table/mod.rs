//! Console play: the operator's seat against bot seats.

pub mod console;
pub mod driver;

pub use console::{Console, ScriptedConsole, StdConsole};
pub use driver::Table;
