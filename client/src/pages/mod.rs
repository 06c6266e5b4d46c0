//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod brochure;
pub mod contact;
pub mod home;
pub mod privacy;
pub mod products;
pub mod schematic;
