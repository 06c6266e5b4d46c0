//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write shared state from Leptos context providers or
//! own their state locally when nothing else needs it.

pub mod contact_form;
pub mod cookie_banner;
pub mod flipbook;
pub mod footer;
pub mod nav_bar;
pub mod product_detail;
pub mod product_sidebar;
pub mod reveal;
pub mod schematic_viewer;
pub mod utm_tracker;
