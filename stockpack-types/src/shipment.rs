use crate::ids::{OrderId, ShippingMethodId, StockLocationId};
use crate::unit::SharedUnit;
use serde::{Deserialize, Serialize};

/// Warehouse or fulfillment center a package ships from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLocation {
    pub id: StockLocationId,
    pub name: String,
}

impl StockLocation {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: StockLocationId(id.into()),
            name: name.into(),
        }
    }
}

/// Back-reference from an inventory unit to the order it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRef {
    pub id: OrderId,
    pub number: String,
}

impl OrderRef {
    pub fn new(id: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: OrderId(id.into()),
            number: number.into(),
        }
    }
}

/// An externally computed rate quote.
///
/// Packages store these as given; nothing in stockpack prices a shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingRate {
    pub shipping_method_id: ShippingMethodId,
    pub cost_cents: i64,

    #[serde(default)]
    pub selected: bool,

    /// Optional, carrier-specific payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ShippingRate {
    pub fn new(shipping_method_id: impl Into<String>, cost_cents: i64) -> Self {
        Self {
            shipping_method_id: ShippingMethodId(shipping_method_id.into()),
            cost_cents,
            selected: false,
            data: None,
        }
    }
}

/// The value a finalized package turns into.
///
/// Holds the same unit handles the package held, so the states written during finalize are
/// visible to every other holder of those units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    pub stock_location: StockLocation,

    #[serde(default)]
    pub shipping_rates: Vec<ShippingRate>,

    #[serde(default)]
    pub inventory_units: Vec<SharedUnit>,
}

impl Shipment {
    pub fn new(
        stock_location: StockLocation,
        shipping_rates: Vec<ShippingRate>,
        inventory_units: Vec<SharedUnit>,
    ) -> Self {
        Self {
            stock_location,
            shipping_rates,
            inventory_units,
        }
    }

    pub fn selected_rate(&self) -> Option<&ShippingRate> {
        self.shipping_rates.iter().find(|r| r.selected)
    }
}
