use super::*;

fn engine_harness() -> &'static Product {
    category("wire-harnesses")
        .and_then(|c| c.product("engine-harness"))
        .unwrap()
}

#[test]
fn lookup_by_id() {
    assert!(category("cable-assemblies").is_some());
    assert!(category("nope").is_none());
    assert_eq!(engine_harness().variants().len(), 3);
}

#[test]
fn simple_product_has_no_variants() {
    let p = category("control-panels").unwrap().product("plc-cabinet").unwrap();
    assert!(p.variants().is_empty());
    assert_eq!(p.resolved_specs(None).len(), 3);
    assert_eq!(p.resolved_specs(Some("whatever")).len(), 3);
}

#[test]
fn variant_spec_overrides_common_in_place() {
    let rows = engine_harness().resolved_specs(Some("high-temp"));
    assert_eq!(rows[1], ("Operating temperature", "-40 °C to 150 °C"));
    assert_eq!(rows.last(), Some(&("Jacket", "Fibreglass sleeve")));
    assert_eq!(rows.len(), 5);
}

#[test]
fn variant_without_clash_appends() {
    let rows = engine_harness().resolved_specs(Some("standard"));
    assert_eq!(rows[1], ("Operating temperature", "-40 °C to 125 °C"));
    assert!(rows.contains(&("Jacket", "Corrugated PA6 conduit")));
}

#[test]
fn unknown_variant_yields_common_specs() {
    let rows = engine_harness().resolved_specs(Some("missing"));
    assert_eq!(rows.len(), 4);
    assert!(rows.contains(&("Sealing", "IP67")));
}

#[test]
fn catalog_ids_are_unique_within_category() {
    for c in CATALOG {
        for (i, p) in c.products.iter().enumerate() {
            assert!(c.products[i + 1..].iter().all(|q| q.id != p.id), "{}", p.id);
        }
    }
}
