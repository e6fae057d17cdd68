pub mod credentials;
pub mod token;

pub use credentials::UserDirectory;
pub use token::{is_recognised_token, issue_token};
