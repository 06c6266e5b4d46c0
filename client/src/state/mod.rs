//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module is plain data plus transitions, free of DOM access, so the
//! rules run in native tests. Components wrap them in `RwSignal`s.

pub mod catalog;
pub mod consent;
pub mod contact_form;
pub mod flipbook;
pub mod schematic;
pub mod utm;
