//! One-shot flash messages carried across a redirect.
//!
//! The message is stored in a signed cookie. It is read and cleared on the
//! next page render; a cookie whose signature does not verify is ignored.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use serde::{Deserialize, Serialize};

/// Name of the cookie holding the flash message.
pub const FLASH_COOKIE: &str = "flash_message";

/// Flash message structure stored in the cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Message type, used as a CSS class ("success", "error")
    #[serde(rename = "type")]
    pub message_type: String,
    /// The message content to display
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message_type: "success".to_string(),
            message: message.into(),
        }
    }

    /// Build the cookie for this message.
    ///
    /// Cookie properties:
    /// - Path: / (readable from any page)
    /// - SameSite: Lax (sent on the redirect that follows a form post)
    /// - Max-Age: 60 (expires on its own if never rendered)
    fn to_cookie(&self) -> Cookie<'static> {
        let json = serde_json::to_string(self).unwrap_or_default();
        let encoded = urlencoding::encode(&json).into_owned();

        Cookie::build((FLASH_COOKIE, encoded))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .max_age(time::Duration::seconds(60))
            .build()
    }

    fn from_cookie(cookie: &Cookie<'_>) -> Option<Self> {
        let decoded = urlencoding::decode(cookie.value()).ok()?;
        serde_json::from_str(&decoded).ok()
    }
}

/// Redirect to `url`, attaching a signed flash cookie.
pub fn redirect_with_flash(jar: SignedCookieJar, url: &str, flash: FlashMessage) -> Response {
    (jar.add(flash.to_cookie()), Redirect::to(url)).into_response()
}

/// Read the pending flash message, if any, and clear it.
pub fn take_flash(jar: SignedCookieJar) -> (SignedCookieJar, Option<FlashMessage>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };

    let flash = FlashMessage::from_cookie(&cookie);
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, flash)
}
