//! Identifier newtypes.
//!
//! Inventory units are keyed by UUID. Catalog and warehouse ids are opaque strings issued by
//! whatever system owns those records.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of an inventory unit.
///
/// Packages index their contents by this id, never by the address of the unit handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryUnitId(pub Uuid);

impl InventoryUnitId {
    /// Fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic id derived from a human label, e.g. `"u1"` in fixtures.
    pub fn from_label(label: &str) -> Self {
        // v5(namespace, label)
        const NAMESPACE: Uuid = Uuid::from_bytes([
            0x9a, 0x1f, 0x62, 0x0e, 0x3c, 0x47, 0x4d, 0x8b, 0xa4, 0x15, 0x7e, 0x20, 0xc9, 0x51, 0x0b,
            0x36,
        ]);
        Self(Uuid::new_v5(&NAMESPACE, label.as_bytes()))
    }
}

impl Default for InventoryUnitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InventoryUnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockLocationId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShippingCategoryId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShippingMethodId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);
