use super::*;

#[test]
fn initial_selects_first_category_only() {
    let sel = CatalogSelection::initial();
    assert_eq!(sel.category, Some(CATALOG[0].id));
    assert_eq!(sel.product, None);
    assert_eq!(sel.variant, None);
}

#[test]
fn selecting_variant_product_defaults_to_first_variant() {
    let mut sel = CatalogSelection::initial();
    sel.select_product("engine-harness");
    assert_eq!(sel.product, Some("engine-harness"));
    assert_eq!(sel.variant, Some("standard"));
}

#[test]
fn selecting_simple_product_clears_variant() {
    let mut sel = CatalogSelection::initial();
    sel.select_product("engine-harness");
    sel.select_product("dashboard-harness");
    assert_eq!(sel.variant, None);
}

#[test]
fn category_change_resets_product_and_variant() {
    let mut sel = CatalogSelection::initial();
    sel.select_product("engine-harness");
    sel.select_variant("high-temp");
    sel.select_category("cable-assemblies");
    assert_eq!(sel.category, Some("cable-assemblies"));
    assert_eq!(sel.product, None);
    assert_eq!(sel.variant, None);
    assert!(sel.resolved_specs().is_empty());
}

#[test]
fn variant_spec_overrides_common_spec() {
    let mut sel = CatalogSelection::initial();
    sel.select_product("engine-harness");
    sel.select_variant("extended");
    let specs = sel.resolved_specs();
    assert!(specs.contains(&("Branches", "12")));
    assert!(specs.contains(&("Sealing", "IP69K")));
    assert!(!specs.contains(&("Branches", "8")));
}

#[test]
fn unknown_ids_are_ignored() {
    let mut sel = CatalogSelection::initial();
    sel.select_product("engine-harness");
    sel.select_variant("nope");
    assert_eq!(sel.variant, Some("standard"));
    sel.select_product("plc-cabinet");
    assert_eq!(sel.product, Some("engine-harness"));
    sel.select_category("nope");
    assert_eq!(sel.category, Some("wire-harnesses"));
}
