//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for outbound collaborators such as notification delivery.

pub mod notifications;
