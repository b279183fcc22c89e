mod contact_service;

pub use contact_service::{ContactService, ContactSubmission};
