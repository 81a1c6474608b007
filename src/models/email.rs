use askama::Template;
use serde::Serialize;

/// Body of the email sent when a user asks to recover their Privy password.
///
/// Values are inserted as given. The recovery link points at
/// `https://privyapp.com/resetpassword/{change_token}`.
#[derive(Template, Debug)]
#[template(path = "emails/password_recovery.html", escape = "none")]
pub struct PasswordRecovery<'a> {
    pub email: &'a str,
    pub change_token: &'a str,
}

impl PasswordRecovery<'_> {
    pub const NAME: &'static str = "password_recovery";
    pub const SUBJECT: &'static str = "Privy Password Support";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}
