//! Hotspot registry for the harness schematic.
//!
//! Each entry's `id` matches an element id in the SVG served from
//! [`SCHEMATIC_SVG_PATH`]. Positions are normalized to the drawing's
//! bounding box (`0.0..=1.0` on both axes).

#[cfg(test)]
#[path = "schematic_test.rs"]
mod schematic_test;

use super::catalog::Specs;

pub const SCHEMATIC_SVG_PATH: &str = "/assets/schematic/harness.svg";

#[derive(Debug, PartialEq)]
pub struct SchematicComponent {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub specs: Specs,
    pub x: f64,
    pub y: f64,
}

pub static COMPONENTS: &[SchematicComponent] = &[
    SchematicComponent {
        id: "main-connector",
        title: "Main connector",
        description: "48-way sealed bulkhead connector joining the harness to the engine control unit.",
        specs: &[("Ways", "48"), ("Sealing", "IP67"), ("Mating cycles", "50")],
        x: 0.12,
        y: 0.50,
    },
    SchematicComponent {
        id: "trunk",
        title: "Main trunk",
        description: "Taped and convoluted trunk carrying power and signal bundles along the frame.",
        specs: &[("Conductors", "64"), ("Jacket", "PA6 conduit"), ("Length", "2.4 m")],
        x: 0.40,
        y: 0.48,
    },
    SchematicComponent {
        id: "fuse-box",
        title: "Fuse and relay box",
        description: "Pre-wired distribution box with mini fuses and ISO relays.",
        specs: &[("Fuses", "12 × mini blade"), ("Relays", "4 × ISO micro")],
        x: 0.55,
        y: 0.22,
    },
    SchematicComponent {
        id: "sensor-branch",
        title: "Sensor branch",
        description: "Shielded twisted-pair branch for crank, cam and temperature sensors.",
        specs: &[("Shielding", "Braided, 85% coverage"), ("Twist", "33 twists/m")],
        x: 0.68,
        y: 0.74,
    },
    SchematicComponent {
        id: "ground-point",
        title: "Ground stud",
        description: "Ring-terminal ground bundle bolted to the chassis.",
        specs: &[("Terminal", "M8 ring"), ("Cross-section", "25 mm²")],
        x: 0.86,
        y: 0.40,
    },
];

#[must_use]
pub fn component(id: &str) -> Option<&'static SchematicComponent> {
    COMPONENTS.iter().find(|c| c.id == id)
}
