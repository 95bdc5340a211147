// Upload & Connect: superficial validation of the resume file and profile URLs.
// Nothing here is persisted or forwarded; accepted values only gate dashboard sections.

pub mod handlers;
pub mod validation;
