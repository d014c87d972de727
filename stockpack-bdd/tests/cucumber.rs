use anyhow::Context;
use cucumber::{given, then, when, World};
use std::collections::HashMap;
use stockpack_bdd::fixture_unit;
use stockpack_domain::{ContentItem, Package, PackageError};
use stockpack_types::{
    InventoryUnitId, SharedUnit, Shipment, ShippingCategory, ShippingMethod, StockLocation,
    UnitState,
};

#[derive(Debug, Default, World)]
pub struct StockpackWorld {
    package: Option<Package>,
    units: HashMap<String, SharedUnit>,
    categories: HashMap<String, ShippingCategory>,
    removal: Option<Result<ContentItem, PackageError>>,
    shipment: Option<Shipment>,
}

fn package(world: &mut StockpackWorld) -> &mut Package {
    world.package.as_mut().expect("package set")
}

fn unit(world: &StockpackWorld, label: &str) -> SharedUnit {
    world
        .units
        .get(label)
        .cloned()
        .unwrap_or_else(|| panic!("unit {label} defined"))
}

fn parse_state(raw: &str) -> anyhow::Result<UnitState> {
    raw.parse::<UnitState>()
        .with_context(|| format!("parse state {raw:?}"))
}

fn split_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn label_ids(raw: &str) -> Vec<InventoryUnitId> {
    split_labels(raw)
        .iter()
        .map(|label| InventoryUnitId::from_label(label))
        .collect()
}

fn item_ids(items: &[&ContentItem]) -> Vec<InventoryUnitId> {
    items.iter().map(|item| item.unit_id()).collect()
}

// ============================================================================
// Setup
// ============================================================================

#[given(expr = "a package at stock location {string}")]
async fn package_at(world: &mut StockpackWorld, location: String) {
    world.package = Some(Package::new(StockLocation::new(location.clone(), location)));
}

#[given(expr = "a unit {string} reporting {string}")]
async fn unit_reporting(world: &mut StockpackWorld, label: String, state: String) {
    let state = parse_state(&state).unwrap();
    world
        .units
        .insert(label.clone(), fixture_unit(&label, state, None));
}

#[given(expr = "a shipping category {string} offering {string}")]
async fn category_offering(world: &mut StockpackWorld, name: String, methods: String) {
    let methods = split_labels(&methods)
        .into_iter()
        .map(|m| ShippingMethod::new(m.clone(), m))
        .collect();
    world.categories.insert(
        name.clone(),
        ShippingCategory::new(name.clone(), name, methods),
    );
}

#[given(expr = "a unit {string} in category {string}")]
async fn unit_in_category(world: &mut StockpackWorld, label: String, category: String) {
    let category = world
        .categories
        .get(&category)
        .cloned()
        .expect("category defined");
    world.units.insert(
        label.clone(),
        fixture_unit(&label, UnitState::OnHand, Some(category)),
    );
}

// ============================================================================
// Actions
// ============================================================================

#[when(expr = "unit {string} is added as {string}")]
async fn add_unit(world: &mut StockpackWorld, label: String, state: String) {
    let state = parse_state(&state).unwrap();
    let unit = unit(world, &label);
    package(world).add_with_state(unit, state);
}

#[when(expr = "unit {string} is removed")]
async fn remove_unit(world: &mut StockpackWorld, label: String) {
    let id = InventoryUnitId::from_label(&label);
    package(world).remove(&id);
}

#[when("the first unit is removed")]
async fn remove_first(world: &mut StockpackWorld) {
    let result = package(world).remove_first();
    world.removal = Some(result);
}

#[when("the package is finalized")]
async fn finalize(world: &mut StockpackWorld) {
    let package = world.package.take().expect("package set");
    world.shipment = Some(package.into_shipment());
}

// ============================================================================
// Assertions
// ============================================================================

#[then(expr = "the package quantity is {int}")]
async fn assert_quantity(world: &mut StockpackWorld, expected: i64) {
    assert_eq!(package(world).quantity(None), expected);
}

#[then(expr = "the {string} quantity is {int}")]
async fn assert_state_quantity(world: &mut StockpackWorld, state: String, expected: i64) {
    let state = parse_state(&state).unwrap();
    assert_eq!(package(world).quantity(Some(state)), expected);
}

#[then(expr = "the package has {int} entries")]
async fn assert_entries(world: &mut StockpackWorld, expected: usize) {
    assert_eq!(package(world).len(), expected);
}

#[then(expr = "the on hand units are {string}")]
async fn assert_on_hand(world: &mut StockpackWorld, labels: String) {
    assert_eq!(item_ids(&package(world).on_hand()), label_ids(&labels));
}

#[then(expr = "the backordered units are {string}")]
async fn assert_backordered(world: &mut StockpackWorld, labels: String) {
    assert_eq!(item_ids(&package(world).backordered()), label_ids(&labels));
}

#[then(expr = "unit {string} is not in the package")]
async fn assert_absent(world: &mut StockpackWorld, label: String) {
    let id = InventoryUnitId::from_label(&label);
    assert!(package(world).find(&id, None).is_none());
}

#[then(expr = "the package inspects as {string}")]
async fn assert_inspect(world: &mut StockpackWorld, expected: String) {
    assert_eq!(stockpack_render::inspect(package(world)), expected);
}

#[then("removal fails with an empty package error")]
async fn assert_empty_error(world: &mut StockpackWorld) {
    let result = world.removal.as_ref().expect("removal attempted");
    assert!(matches!(result, Err(PackageError::EmptyPackage)));
}

#[then(expr = "the shipping methods are {string}")]
async fn assert_methods(world: &mut StockpackWorld, expected: String) {
    let methods: Vec<String> = package(world)
        .shipping_methods()
        .into_iter()
        .map(|m| m.id.0)
        .collect();
    assert_eq!(methods, split_labels(&expected));
}

#[then(expr = "the shipment ships from {string}")]
async fn assert_shipment_location(world: &mut StockpackWorld, location: String) {
    let shipment = world.shipment.as_ref().expect("shipment built");
    assert_eq!(shipment.stock_location.id.0, location);
}

#[then(expr = "the shipment units are {string}")]
async fn assert_shipment_units(world: &mut StockpackWorld, labels: String) {
    let shipment = world.shipment.as_ref().expect("shipment built");
    let ids: Vec<InventoryUnitId> = shipment.inventory_units.iter().map(|u| u.id()).collect();
    assert_eq!(ids, label_ids(&labels));
}

#[then(expr = "unit {string} reports {string}")]
async fn assert_unit_state(world: &mut StockpackWorld, label: String, state: String) {
    let state = parse_state(&state).unwrap();
    assert_eq!(unit(world, &label).state(), state);
}

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let features_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("features");
    StockpackWorld::cucumber().run_and_exit(features_path).await;
}
