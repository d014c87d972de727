use crate::config::PackageConfig;
use crate::content::ContentItem;
use crate::error::{PackageError, PackageResult};
use indexmap::IndexMap;
use stockpack_types::{
    InventoryUnitId, OrderRef, SharedUnit, Shipment, ShippingCategory, ShippingMethod,
    ShippingRate, StockLocation, UnitState,
};
use tracing::debug;

/// Inventory units planned to ship together from one stock location.
///
/// Contents are indexed by [`InventoryUnitId`] in insertion order. A unit appears at most once:
/// adding a unit that already has an entry is a no-op, whatever state the second add asks for.
///
/// # Finalizing
///
/// [`Package::into_shipment`] writes each recorded state back onto the shared unit. Several
/// packages may hold the same unit while an order is being split, and nothing here stops two of
/// them from finalizing it. The caller must make sure only one package finalizes a given unit.
#[derive(Debug, Clone)]
pub struct Package {
    location: StockLocation,
    contents: IndexMap<InventoryUnitId, Vec<ContentItem>>,
    shipping_rates: Vec<ShippingRate>,
    default_state: UnitState,
}

impl Package {
    pub fn new(location: StockLocation) -> Self {
        Self::with_config(location, &PackageConfig::default())
    }

    pub fn with_config(location: StockLocation, config: &PackageConfig) -> Self {
        Self {
            location,
            contents: IndexMap::new(),
            shipping_rates: Vec::new(),
            default_state: config.default_state,
        }
    }

    /// Seed a package from existing content items, e.g. the remainder of a split.
    ///
    /// Items are indexed in order; a later item for a unit that is already present is dropped.
    pub fn with_contents(
        location: StockLocation,
        items: impl IntoIterator<Item = ContentItem>,
    ) -> Self {
        let mut package = Self::new(location);
        for item in items {
            let id = item.unit_id();
            if package.contains(&id) {
                debug!(unit = %id, "skipping duplicate seed item");
                continue;
            }
            package.contents.entry(id).or_default().push(item);
        }
        package
    }

    pub fn location(&self) -> &StockLocation {
        &self.location
    }

    pub fn default_state(&self) -> UnitState {
        self.default_state
    }

    pub fn shipping_rates(&self) -> &[ShippingRate] {
        &self.shipping_rates
    }

    pub fn shipping_rates_mut(&mut self) -> &mut Vec<ShippingRate> {
        &mut self.shipping_rates
    }

    pub fn set_shipping_rates(&mut self, rates: Vec<ShippingRate>) {
        self.shipping_rates = rates;
    }

    /// Add `unit` in the package's default state. Returns `false` if the unit was already present.
    pub fn add(&mut self, unit: SharedUnit) -> bool {
        self.add_with_state(unit, self.default_state)
    }

    /// Add `unit` in `state`. Returns `false`, leaving the existing entry untouched, if the unit
    /// is already present in any state.
    pub fn add_with_state(&mut self, unit: SharedUnit, state: UnitState) -> bool {
        let id = unit.id();
        if self.find(&id, None).is_some() {
            debug!(unit = %id, requested = %state, "unit already in package; add skipped");
            return false;
        }
        self.contents
            .entry(id)
            .or_default()
            .push(ContentItem::new(unit, state));
        true
    }

    pub fn add_multiple(&mut self, units: impl IntoIterator<Item = SharedUnit>) {
        self.add_multiple_with_state(units, self.default_state);
    }

    pub fn add_multiple_with_state(
        &mut self,
        units: impl IntoIterator<Item = SharedUnit>,
        state: UnitState,
    ) {
        for unit in units {
            self.add_with_state(unit, state);
        }
    }

    /// Entry for the unit, restricted to `state` when one is given.
    pub fn find(&self, id: &InventoryUnitId, state: Option<UnitState>) -> Option<&ContentItem> {
        self.contents
            .get(id)?
            .iter()
            .find(|item| state.is_none_or(|s| item.state().as_str() == s.as_str()))
    }

    pub fn contains(&self, id: &InventoryUnitId) -> bool {
        self.find(id, None).is_some()
    }

    /// Remove and return the unit's entry. The key is dropped once it has no entries left.
    pub fn remove(&mut self, id: &InventoryUnitId) -> Option<ContentItem> {
        let items = self.contents.get_mut(id)?;
        let removed = (!items.is_empty()).then(|| items.remove(0));
        if items.is_empty() {
            self.contents.shift_remove(id);
        }
        if removed.is_some() {
            debug!(unit = %id, "removed unit from package");
        }
        removed
    }

    /// Remove and return the entry of the first unit in insertion order.
    pub fn remove_first(&mut self) -> PackageResult<ContentItem> {
        let id = *self
            .contents
            .keys()
            .next()
            .ok_or(PackageError::EmptyPackage)?;
        self.remove(&id).ok_or(PackageError::EmptyPackage)
    }

    /// All entries, in index order.
    pub fn contents(&self) -> impl Iterator<Item = &ContentItem> {
        self.contents.values().flatten()
    }

    /// Number of entries. Not the same thing as [`Package::quantity`].
    pub fn len(&self) -> usize {
        self.contents.values().map(Vec::len).sum()
    }

    /// Sum of the units' quantities, restricted to entries recorded in `state` when one is given.
    ///
    /// Saturates at `i64::MIN`/`i64::MAX` instead of overflowing.
    pub fn quantity(&self, state: Option<UnitState>) -> i64 {
        self.contents()
            .filter(|item| state.is_none_or(|s| item.state().as_str() == s.as_str()))
            .map(ContentItem::quantity)
            .fold(0i64, i64::saturating_add)
    }

    /// True when the total quantity is zero.
    ///
    /// A package holding only zero-quantity units is empty even though it has entries.
    pub fn is_empty(&self) -> bool {
        self.quantity(None) == 0
    }

    pub fn weight(&self) -> f64 {
        self.contents().map(ContentItem::weight).sum()
    }

    /// Entries whose *unit* currently reports on-hand, regardless of the recorded state.
    pub fn on_hand(&self) -> Vec<&ContentItem> {
        self.contents()
            .filter(|item| item.unit().state().is_on_hand())
            .collect()
    }

    /// Entries whose *unit* currently reports backordered.
    pub fn backordered(&self) -> Vec<&ContentItem> {
        self.contents()
            .filter(|item| item.unit().state().is_backordered())
            .collect()
    }

    /// Entries whose *unit* currently reports awaiting feed.
    pub fn awaiting_feed(&self) -> Vec<&ContentItem> {
        self.contents()
            .filter(|item| item.unit().state().is_awaiting_feed())
            .collect()
    }

    /// Distinct shipping categories of the contained variants, first seen first.
    pub fn shipping_categories(&self) -> Vec<ShippingCategory> {
        let mut categories: Vec<ShippingCategory> = Vec::new();
        for item in self.contents() {
            let Some(category) = item.variant().shipping_category else {
                continue;
            };
            if !categories.iter().any(|c| c.id == category.id) {
                categories.push(category);
            }
        }
        categories
    }

    /// Shipping methods eligible for every category in the package.
    ///
    /// Ordered as the first category lists them. No categories means no methods. A single
    /// category yields its list as is; with two or more the result is deduplicated by id.
    pub fn shipping_methods(&self) -> Vec<ShippingMethod> {
        let categories = self.shipping_categories();
        let Some((first, rest)) = categories.split_first() else {
            return Vec::new();
        };
        if rest.is_empty() {
            return first.shipping_methods.clone();
        }

        let mut methods: Vec<ShippingMethod> = Vec::new();
        for method in &first.shipping_methods {
            let shared = rest.iter().all(|c| c.supports(&method.id));
            if shared && !methods.iter().any(|m| m.id == method.id) {
                methods.push(method.clone());
            }
        }
        methods
    }

    /// Order of the first unit that links to one.
    ///
    /// Best effort: units without an order back-reference are skipped.
    pub fn order(&self) -> Option<OrderRef> {
        self.contents().find_map(|item| item.unit().order())
    }

    /// Finalize the package.
    ///
    /// Writes every entry's recorded state onto its unit, then builds a shipment from this
    /// package's location, rate quotes and units (in [`Package::contents`] order). The unit
    /// writes are visible to every other holder of those units.
    pub fn into_shipment(self) -> Shipment {
        debug!(
            location = %self.location.id.0,
            units = self.len(),
            rates = self.shipping_rates.len(),
            "finalizing package"
        );

        for item in self.contents() {
            item.unit().set_state(item.state());
        }

        let units: Vec<SharedUnit> = self.contents().map(|item| item.unit().clone()).collect();
        Shipment::new(self.location, self.shipping_rates, units)
    }
}
