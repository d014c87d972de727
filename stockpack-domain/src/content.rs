use serde::{Deserialize, Serialize};
use stockpack_types::{InventoryUnitId, SharedUnit, UnitState, Variant};

/// A unit together with the state the package recorded for it.
///
/// `state` is the package's bookkeeping and may disagree with the unit's own state until the
/// package is finalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    unit: SharedUnit,
    state: UnitState,
}

impl ContentItem {
    pub fn new(unit: SharedUnit, state: UnitState) -> Self {
        Self { unit, state }
    }

    pub fn unit(&self) -> &SharedUnit {
        &self.unit
    }

    pub fn unit_id(&self) -> InventoryUnitId {
        self.unit.id()
    }

    pub fn state(&self) -> UnitState {
        self.state
    }

    pub fn quantity(&self) -> i64 {
        self.unit.quantity()
    }

    pub fn weight(&self) -> f64 {
        self.unit.weight()
    }

    pub fn variant(&self) -> Variant {
        self.unit.variant()
    }
}
