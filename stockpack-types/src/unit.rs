use crate::catalog::Variant;
use crate::ids::InventoryUnitId;
use crate::shipment::OrderRef;
use crate::state::UnitState;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// One unit of a variant awaiting fulfillment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryUnit {
    pub id: InventoryUnitId,
    pub variant: Variant,

    /// Usually 1. Packages sum whatever is reported here, zero and negative included.
    #[serde(default = "default_quantity")]
    pub quantity: i64,

    #[serde(default)]
    pub state: UnitState,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderRef>,
}

fn default_quantity() -> i64 {
    1
}

impl InventoryUnit {
    pub fn new(id: InventoryUnitId, variant: Variant) -> Self {
        Self {
            id,
            variant,
            quantity: default_quantity(),
            state: UnitState::default(),
            order: None,
        }
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_state(mut self, state: UnitState) -> Self {
        self.state = state;
        self
    }

    pub fn with_order(mut self, order: OrderRef) -> Self {
        self.order = Some(order);
        self
    }

    /// Variant weight times quantity.
    pub fn weight(&self) -> f64 {
        self.variant.weight * self.quantity as f64
    }

    pub fn is_on_hand(&self) -> bool {
        self.state.is_on_hand()
    }
    pub fn is_backordered(&self) -> bool {
        self.state.is_backordered()
    }
    pub fn is_awaiting_feed(&self) -> bool {
        self.state.is_awaiting_feed()
    }
}

/// Shared handle to an inventory unit.
///
/// Several candidate packages may hold the same unit while an order is being split. Only the
/// state can be written through the handle; identity is the unit id, not the allocation.
///
/// Handles are single-threaded (`!Send`). Every accessor copies or clones what it reads, so no
/// borrow of the unit outlives the call and [`SharedUnit::set_state`] cannot collide with one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SharedUnit(Rc<RefCell<InventoryUnit>>);

impl SharedUnit {
    pub fn new(unit: InventoryUnit) -> Self {
        Self(Rc::new(RefCell::new(unit)))
    }

    pub fn id(&self) -> InventoryUnitId {
        self.0.borrow().id
    }

    pub fn state(&self) -> UnitState {
        self.0.borrow().state
    }

    pub fn set_state(&self, state: UnitState) {
        self.0.borrow_mut().state = state;
    }

    pub fn quantity(&self) -> i64 {
        self.0.borrow().quantity
    }

    pub fn weight(&self) -> f64 {
        self.0.borrow().weight()
    }

    pub fn variant(&self) -> Variant {
        self.0.borrow().variant.clone()
    }

    pub fn order(&self) -> Option<OrderRef> {
        self.0.borrow().order.clone()
    }

    /// True when both handles point at the same unit allocation.
    pub fn ptr_eq(&self, other: &SharedUnit) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
