//! General purpose tools: arithmetic and echo.

pub mod add;
pub mod echo;

pub use add::{AddParams, AddTool, Sum};
pub use echo::{EchoParams, EchoTool};
