use std::sync::Arc;

use sli_core::{Order, ViewStarted, CHECKOUT_SUCCESS_REQUEST_ID};

/// Order observed during checkout confirmation, held until the content of
/// the same request is finalized. Scoped to one request; a fresh scope
/// always starts `Empty`.
#[derive(Debug, Clone, Default)]
pub enum OrderCapture {
    #[default]
    Empty,
    Captured(Arc<Order>),
}

impl OrderCapture {
    /// Feeds a view-started event through the state machine. Returns true
    /// when an order was captured from this event.
    ///
    /// Only a checkout-success view with an order in its context causes a
    /// transition; repeated captures overwrite rather than accumulate. A
    /// checkout-success view without an order normally leaves the state
    /// as-is; `clear_on_missing_order` switches that case to a reset.
    pub fn observe(&mut self, event: &ViewStarted, clear_on_missing_order: bool) -> bool {
        if event.request_id != CHECKOUT_SUCCESS_REQUEST_ID {
            return false;
        }
        let Some(view) = &event.view else {
            return false;
        };

        match &view.current_order {
            Some(order) => {
                *self = OrderCapture::Captured(Arc::clone(order));
                true
            }
            None => {
                if clear_on_missing_order {
                    *self = OrderCapture::Empty;
                }
                false
            }
        }
    }

    pub fn order(&self) -> Option<&Order> {
        match self {
            OrderCapture::Empty => None,
            OrderCapture::Captured(order) => Some(order),
        }
    }
}
