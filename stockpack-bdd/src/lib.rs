//! BDD harness (cucumber-rs).
//!
//! This crate exists to keep scenario tests isolated from the production crates.

use stockpack_types::{
    InventoryUnit, InventoryUnitId, SharedUnit, ShippingCategory, UnitState, Variant,
};

/// Build a fixture unit whose id is derived from `label`.
pub fn fixture_unit(
    label: &str,
    state: UnitState,
    category: Option<ShippingCategory>,
) -> SharedUnit {
    let mut variant = Variant::new(format!("sku-{label}"), label).with_weight(1.0);
    variant.shipping_category = category;
    SharedUnit::new(InventoryUnit::new(InventoryUnitId::from_label(label), variant).with_state(state))
}
