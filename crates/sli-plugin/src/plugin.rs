use sli_cookie::{data_cookie, CookieSink};
use sli_core::{SliResult, SliSettings, ViewStarted};
use sli_inject::{footer, patch_document, rac_header};
use tracing::{debug, info};

use crate::capture::OrderCapture;

/// State belonging to a single request/response cycle. The host creates
/// one per request and must not share it across concurrent requests.
#[derive(Debug, Default)]
pub struct RequestScope {
    pub capture: OrderCapture,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The SLI search integration: holds the immutable settings and exposes
/// the two lifecycle handlers. All per-request state lives in the
/// [`RequestScope`] threaded through the calls.
pub struct SliSearchPlugin {
    settings: SliSettings,
}

impl SliSearchPlugin {
    pub fn new(settings: SliSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SliSettings {
        &self.settings
    }

    /// View-started handler: captures the order on checkout confirmation
    /// and emits the session data cookie on every request. Sink errors
    /// propagate unmodified.
    pub fn on_view_started(
        &self,
        event: &ViewStarted,
        scope: &mut RequestScope,
        cookies: &dyn CookieSink,
    ) -> SliResult<()> {
        let captured = scope
            .capture
            .observe(event, self.settings.clear_capture_on_missing_order);
        if captured {
            if let Some(order) = scope.capture.order() {
                info!(order_id = %order.id, "captured checkout order");
            }
        }

        let cookie = data_cookie(&event.session, &self.settings);
        cookies.set(&cookie)?;
        debug!(cookie = %cookie.value, "set session data cookie");
        Ok(())
    }

    /// Content-finalize handler: builds the header and footer fragments
    /// from the settings and any captured order, then patches the page.
    pub fn on_finalize_content(&self, content: String, scope: &RequestScope) -> String {
        let header = rac_header(&self.settings);
        let footer = footer(&self.settings, scope.capture.order());

        if !header.is_empty() || !footer.is_empty() {
            debug!(
                header_bytes = header.len(),
                footer_bytes = footer.len(),
                "injecting search fragments"
            );
        }

        patch_document(content, &header, &footer, self.settings.debug)
    }
}
