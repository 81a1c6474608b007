const PASSWORD_RECOVERY_SOURCE: &str =
    include_str!("../../templates/emails/password_recovery.html");

/// What the password recovery body must look like with plain placeholder substitution.
pub fn expected_password_recovery(email: &str, change_token: &str) -> String {
    PASSWORD_RECOVERY_SOURCE
        .replace("{{ email }}", email)
        .replace("{{ change_token }}", change_token)
}

pub fn reset_link(change_token: &str) -> String {
    format!("<a href=\"https://privyapp.com/resetpassword/{change_token}\">")
}
