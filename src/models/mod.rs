pub mod email;

pub use email::{PasswordRecovery, RenderedEmail};
