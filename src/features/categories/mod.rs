//! Categories feature
//!
//! Categories group recipes. Names are unique and every category carries a
//! slug derived from its name.
//!
//! ## Endpoints
//!
//! | Method | Path                   | Description          |
//! |--------|------------------------|----------------------|
//! | GET    | /api/categories        | List categories      |
//! | POST   | /api/categories        | Create a category    |
//! | GET    | /api/categories/{id}   | Get a category       |
//! | PUT    | /api/categories/{id}   | Rename a category    |
//! | DELETE | /api/categories/{id}   | Delete a category    |

pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use errors::CategoryError;
