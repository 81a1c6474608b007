use askama::Template;
use log::{debug, error};

use crate::{
    error::{AppError, AppResult},
    models::email::{PasswordRecovery, RenderedEmail},
};

/// Renders the password recovery email body for `email`, linking to `change_token`.
///
/// Inputs are not validated; empty strings render as empty substitutions.
pub fn render_password_recovery(email: &str, change_token: &str) -> AppResult<String> {
    let html = PasswordRecovery {
        email,
        change_token,
    }
    .render()
    .map_err(|e| {
        error!("render {} failed: {e}", PasswordRecovery::NAME);
        AppError::render(PasswordRecovery::NAME)(e)
    })?;

    debug!("rendered {} ({} bytes)", PasswordRecovery::NAME, html.len());
    Ok(html)
}

pub fn render_password_recovery_email(email: &str, change_token: &str) -> AppResult<RenderedEmail> {
    let html = render_password_recovery(email, change_token)?;
    Ok(RenderedEmail {
        subject: PasswordRecovery::SUBJECT.to_string(),
        html,
    })
}
