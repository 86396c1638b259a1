use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::types::{Order, SessionSnapshot};

/// Request identifier of the checkout confirmation view, the only view
/// that carries an order worth capturing.
pub const CHECKOUT_SUCCESS_REQUEST_ID: &str = "checkout_success";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ViewStarted,
    FinalizeContent,
}

/// Variable context of a rendered template view.
///
/// The order is surfaced as a typed field; everything else the template saw
/// rides along as an opaque bag this component never inspects.
#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    pub current_order: Option<Arc<Order>>,
    pub vars: HashMap<String, Value>,
}

/// Fired when the host starts rendering a view for a request.
#[derive(Debug, Clone)]
pub struct ViewStarted {
    pub request_id: String,
    pub view: Option<ViewContext>,
    pub session: SessionSnapshot,
}

/// Fired once the page HTML is assembled and ready for post-processing.
#[derive(Debug, Clone)]
pub struct FinalizeContent {
    pub content: String,
}
