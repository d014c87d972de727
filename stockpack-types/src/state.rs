use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fulfillment state of an inventory unit.
///
/// A package records one of the first three when a unit is added; the remaining variants are
/// lifecycle states the unit may carry externally once it has left the warehouse.
///
/// States compare by their canonical snake_case name, which is also the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitState {
    #[default]
    OnHand,
    Backordered,
    AwaitingFeed,
    Shipped,
    Returned,
}

impl UnitState {
    pub const ALL: [UnitState; 5] = [
        UnitState::OnHand,
        UnitState::Backordered,
        UnitState::AwaitingFeed,
        UnitState::Shipped,
        UnitState::Returned,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UnitState::OnHand => "on_hand",
            UnitState::Backordered => "backordered",
            UnitState::AwaitingFeed => "awaiting_feed",
            UnitState::Shipped => "shipped",
            UnitState::Returned => "returned",
        }
    }

    pub fn is_on_hand(self) -> bool {
        matches!(self, UnitState::OnHand)
    }
    pub fn is_backordered(self) -> bool {
        matches!(self, UnitState::Backordered)
    }
    pub fn is_awaiting_feed(self) -> bool {
        matches!(self, UnitState::AwaitingFeed)
    }
}

impl fmt::Display for UnitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit state: {0:?}")]
pub struct UnknownUnitState(pub String);

impl FromStr for UnitState {
    type Err = UnknownUnitState;

    /// Accepts the snake_case name, ignoring surrounding whitespace and ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        UnitState::ALL
            .into_iter()
            .find(|state| state.as_str() == normalized)
            .ok_or_else(|| UnknownUnitState(s.to_string()))
    }
}
