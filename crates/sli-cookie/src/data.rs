use sli_core::{SessionSnapshot, SliSettings};
use url::form_urlencoded;

use crate::SetCookie;

pub const DATA_COOKIE_NAME: &str = "sli_data";

/// Builds the session data cookie: a form-urlencoded payload carrying the
/// session type, cart item count, language, and currency, in that key
/// order, scoped to the configured domain.
pub fn data_cookie(session: &SessionSnapshot, settings: &SliSettings) -> SetCookie {
    let value = form_urlencoded::Serializer::new(String::new())
        .append_pair("ut", &session.session_type)
        .append_pair("sc", &session.cart_item_count.to_string())
        .append_pair("lang", &session.language_code)
        .append_pair("cur", &session.currency_code)
        .finish();

    SetCookie {
        name: DATA_COOKIE_NAME.to_string(),
        value,
        path: "/".to_string(),
        domain: settings.cookie_domain.clone(),
    }
}
