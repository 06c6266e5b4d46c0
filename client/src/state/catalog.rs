//! Catalog browser selection: category, product and variant.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::content::catalog::{self, CATALOG, Category, Product, Variant};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogSelection {
    pub category: Option<&'static str>,
    pub product: Option<&'static str>,
    pub variant: Option<&'static str>,
}

impl CatalogSelection {
    /// Initial selection: first category, nothing else.
    #[must_use]
    pub fn initial() -> Self {
        Self { category: CATALOG.first().map(|c| c.id), ..Self::default() }
    }

    /// Select a category; product and variant are cleared.
    pub fn select_category(&mut self, id: &str) {
        let Some(c) = catalog::category(id) else {
            return;
        };
        self.category = Some(c.id);
        self.product = None;
        self.variant = None;
    }

    /// Select a product in the current category; the variant resets to the
    /// product's first variant, or none for simple products.
    pub fn select_product(&mut self, id: &str) {
        let Some(p) = self.current_category().and_then(|c| c.product(id)) else {
            return;
        };
        self.product = Some(p.id);
        self.variant = p.variants().first().map(|v| v.id);
    }

    pub fn select_variant(&mut self, id: &str) {
        if let Some(v) = self.current_product().and_then(|p| p.variant(id)) {
            self.variant = Some(v.id);
        }
    }

    #[must_use]
    pub fn current_category(&self) -> Option<&'static Category> {
        self.category.and_then(catalog::category)
    }

    #[must_use]
    pub fn current_product(&self) -> Option<&'static Product> {
        let id = self.product?;
        self.current_category()?.product(id)
    }

    #[must_use]
    pub fn current_variant(&self) -> Option<&'static Variant> {
        let id = self.variant?;
        self.current_product()?.variant(id)
    }

    #[must_use]
    pub fn resolved_specs(&self) -> Vec<(&'static str, &'static str)> {
        self.current_product()
            .map(|p| p.resolved_specs(self.variant))
            .unwrap_or_default()
    }
}
