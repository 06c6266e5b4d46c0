//! Product catalog: categories, products and their specification tables.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Ordered `(label, value)` specification rows.
pub type Specs = &'static [(&'static str, &'static str)];

#[derive(Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub products: &'static [Product],
}

#[derive(Debug, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub kind: ProductKind,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ProductKind {
    Simple { specs: Specs },
    Variants { variants: &'static [Variant], common_specs: Specs },
}

#[derive(Debug, PartialEq, Eq)]
pub struct Variant {
    pub id: &'static str,
    pub name: &'static str,
    pub specs: Specs,
}

impl Product {
    #[must_use]
    pub fn variants(&self) -> &'static [Variant] {
        match self.kind {
            ProductKind::Simple { .. } => &[],
            ProductKind::Variants { variants, .. } => variants,
        }
    }

    #[must_use]
    pub fn variant(&self, id: &str) -> Option<&'static Variant> {
        self.variants().iter().find(|v| v.id == id)
    }

    /// Spec rows to display. For variant products the common rows come first;
    /// a variant row with the same label replaces the common value in place,
    /// and variant-only rows follow. An unknown variant yields the common rows.
    #[must_use]
    pub fn resolved_specs(&self, variant_id: Option<&str>) -> Vec<(&'static str, &'static str)> {
        match self.kind {
            ProductKind::Simple { specs } => specs.to_vec(),
            ProductKind::Variants { common_specs, .. } => {
                let overrides = variant_id.and_then(|id| self.variant(id)).map_or(&[][..], |v| v.specs);
                let mut rows: Vec<_> = common_specs
                    .iter()
                    .map(|&(label, value)| {
                        let value = overrides
                            .iter()
                            .find(|(l, _)| *l == label)
                            .map_or(value, |&(_, v)| v);
                        (label, value)
                    })
                    .collect();
                rows.extend(
                    overrides
                        .iter()
                        .filter(|(label, _)| !common_specs.iter().any(|(l, _)| l == label))
                        .copied(),
                );
                rows
            }
        }
    }
}

#[must_use]
pub fn category(id: &str) -> Option<&'static Category> {
    CATALOG.iter().find(|c| c.id == id)
}

impl Category {
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&'static Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

pub static CATALOG: &[Category] = &[
    Category {
        id: "wire-harnesses",
        name: "Wire harnesses",
        products: &[
            Product {
                id: "engine-harness",
                name: "Engine harness",
                summary: "Sealed main harness for off-highway engines with integrated sensor branches.",
                kind: ProductKind::Variants {
                    common_specs: &[
                        ("Conductor", "Tinned copper, FLRY-B"),
                        ("Operating temperature", "-40 °C to 125 °C"),
                        ("Sealing", "IP67"),
                        ("Branches", "8"),
                    ],
                    variants: &[
                        Variant {
                            id: "standard",
                            name: "Standard",
                            specs: &[("Jacket", "Corrugated PA6 conduit")],
                        },
                        Variant {
                            id: "high-temp",
                            name: "High temperature",
                            specs: &[
                                ("Operating temperature", "-40 °C to 150 °C"),
                                ("Jacket", "Fibreglass sleeve"),
                            ],
                        },
                        Variant {
                            id: "extended",
                            name: "Extended",
                            specs: &[("Branches", "12"), ("Sealing", "IP69K")],
                        },
                    ],
                },
            },
            Product {
                id: "dashboard-harness",
                name: "Dashboard harness",
                summary: "Instrument panel harness with pre-terminated connectors and clip points.",
                kind: ProductKind::Simple {
                    specs: &[
                        ("Conductor", "Copper, 0.35 mm² to 2.5 mm²"),
                        ("Connectors", "Automotive sealed and unsealed"),
                        ("Testing", "100% continuity and pin-retention"),
                    ],
                },
            },
        ],
    },
    Category {
        id: "cable-assemblies",
        name: "Cable assemblies",
        products: &[
            Product {
                id: "m12-sensor-cable",
                name: "M12 sensor cable",
                summary: "Overmolded M12 cordsets for factory automation sensors.",
                kind: ProductKind::Variants {
                    common_specs: &[
                        ("Connector", "M12, A-coded"),
                        ("Jacket", "PUR, drag-chain rated"),
                        ("Rating", "IP68"),
                    ],
                    variants: &[
                        Variant {
                            id: "4-pin",
                            name: "4-pin",
                            specs: &[("Poles", "4"), ("Current", "4 A")],
                        },
                        Variant {
                            id: "8-pin",
                            name: "8-pin",
                            specs: &[("Poles", "8"), ("Current", "2 A")],
                        },
                    ],
                },
            },
            Product {
                id: "power-cable",
                name: "Power cable assembly",
                summary: "High-current battery and inverter cables with crimped ring terminals.",
                kind: ProductKind::Simple {
                    specs: &[
                        ("Cross-section", "16 mm² to 95 mm²"),
                        ("Voltage", "Up to 1000 V DC"),
                        ("Terminals", "Tinned copper ring, hydraulic crimp"),
                    ],
                },
            },
        ],
    },
    Category {
        id: "control-panels",
        name: "Control panels",
        products: &[Product {
            id: "plc-cabinet",
            name: "PLC cabinet wiring",
            summary: "Turnkey wiring of control cabinets to customer schematics.",
            kind: ProductKind::Simple {
                specs: &[
                    ("Standard", "IEC 60204-1, UL 508A"),
                    ("Documentation", "Wire lists and as-built schematics"),
                    ("Testing", "Point-to-point and hi-pot"),
                ],
            },
        }],
    },
];
