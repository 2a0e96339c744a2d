// Request extractors shared by handlers

pub mod extract;
pub mod session;

pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use session::{CurrentSession, SESSION_HEADER};
