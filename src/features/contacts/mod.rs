//! Contacts feature
//!
//! Visitors submit contact messages through a public form. Administrators
//! list them and mark them as read. Each submission also triggers an admin
//! notification.
//!
//! ## Endpoints
//!
//! | Method | Path                             | Description              |
//! |--------|----------------------------------|--------------------------|
//! | POST   | /api/contacts                    | Submit a contact message |
//! | GET    | /api/admin/contacts              | List contact messages    |
//! | GET    | /api/admin/contacts/{id}         | Get a contact message    |
//! | PATCH  | /api/admin/contacts/{id}/read    | Mark a message as read   |

pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use errors::ContactError;
