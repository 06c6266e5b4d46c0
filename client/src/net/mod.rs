//! Networking helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the contact endpoint and static asset fetches.

pub mod api;
