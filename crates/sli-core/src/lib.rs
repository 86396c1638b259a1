pub mod error;
pub mod events;
pub mod settings;
pub mod types;

pub use error::{SliError, SliResult};
pub use events::{EventKind, FinalizeContent, ViewContext, ViewStarted, CHECKOUT_SUCCESS_REQUEST_ID};
pub use settings::{Identifier, SliSettings};
pub use types::{Order, OrderLineItem, SessionSnapshot, TotalKind, TotalLine};
