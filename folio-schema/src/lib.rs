pub mod payload;
pub mod url;

pub use payload::{AuthRequest, NewContact, NewLink, NewProject, Profile};
pub use url::normalize_url;
