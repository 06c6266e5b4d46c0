//! Static site content compiled into the client.

pub mod brochure;
pub mod catalog;
pub mod schematic;
