//! Shared collaborator types for the stockpack workspace.
//!
//! # Design constraints
//! - These types model entities owned elsewhere (catalog, order, warehouse). A package only
//!   reads them, except for the inventory unit state written back on finalize.
//! - Everything here is serde-serializable so a host can move it across its own boundaries.
//! - Prefer adding optional fields over changing semantics.

pub mod catalog;
pub mod ids;
pub mod shipment;
pub mod state;
pub mod unit;

pub use catalog::{ShippingCategory, ShippingMethod, Variant};
pub use ids::{
    InventoryUnitId, OrderId, ShippingCategoryId, ShippingMethodId, StockLocationId, VariantId,
};
pub use shipment::{OrderRef, Shipment, ShippingRate, StockLocation};
pub use state::{UnitState, UnknownUnitState};
pub use unit::{InventoryUnit, SharedUnit};
