pub mod capture;
pub mod dispatch;
pub mod plugin;

pub use capture::OrderCapture;
pub use dispatch::{Dispatcher, Event};
pub use plugin::{RequestScope, SliSearchPlugin};
