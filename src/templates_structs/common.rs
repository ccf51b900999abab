use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::take_flash;

pub const APP_NAME: &str = "PitchDeck Generator";

/// Context shared by every page. Templates access these as `ctx.app_name`,
/// `ctx.csrf_token`, etc. An empty `flash` means no message.
pub struct PageContext {
    pub app_name: String,
    pub csrf_token: String,
    pub flash: String,
}

impl PageContext {
    pub fn build(session: &Session) -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            csrf_token: csrf::get_or_create_token(session),
            flash: take_flash(session).unwrap_or_default(),
        }
    }
}
