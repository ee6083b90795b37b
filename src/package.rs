//! Package aggregate: a container and the items packed into it.
//!
//! Every derived quantity (weight, remaining volume, void-fill weight) is
//! computed from the current items on each call; nothing is cached.

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::config::PhysicalConfig;
use crate::model::{Container, Item};
use crate::types::{Dimensional, HoldsItems, InnerGeometry, Weighted};
use crate::units::{Density, Length, Volume, Weight};

/// Source of identifiers for packages created without one.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Generates random UUID v4 strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F: Fn() -> String> IdGenerator for F {
    fn next_id(&self) -> String {
        self()
    }
}

/// A container holding an ordered list of items.
///
/// The outer geometry of a package is the geometry of its container; the
/// package stores no dimensions of its own. Not internally synchronized:
/// share it across threads behind a lock.
///
/// # Fields
/// * `id` - Identifier, fixed at construction
/// * `container` - The box bounding the contents (unbounded by default)
/// * `items` - Items in insertion order, duplicates allowed
/// * `void_fill_density` - Filler weight per unit of empty volume
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use physical::model::{Container, Item};
/// use physical::package::Package;
/// use physical::types::HoldsItems;
/// use physical::units::{Volume, VolumeUnit};
///
/// let container = Container::builder().dimensions([1.0, 2.0, 3.0]).build().unwrap();
/// let item = Arc::new(Item::builder().dimensions([1.0, 1.0, 1.0]).build().unwrap());
///
/// let mut package = Package::builder().container(container).build();
/// package.add_item(Arc::clone(&item));
/// assert_eq!(package.remaining_volume(), Volume::new(5.0, VolumeUnit::Milliliter));
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct Package {
    id: String,
    container: Container,
    items: Vec<Arc<Item>>,
    void_fill_density: Density,
}

impl Package {
    /// Builder using the default configuration.
    pub fn builder() -> PackageBuilder {
        PhysicalConfig::default().package_builder()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn void_fill_density(&self) -> Density {
        self.void_fill_density
    }

    /// Weight of the empty container.
    pub fn tare_weight(&self) -> Weight {
        self.container.weight()
    }

    /// Usable container volume minus the volume of all items.
    ///
    /// Negative when the items together exceed the container.
    pub fn remaining_volume(&self) -> Volume {
        self.container.usable_volume() - self.used_volume()
    }

    /// Weight of filler needed for the remaining volume, in the unit of the
    /// void-fill density.
    pub fn void_fill_weight(&self) -> Weight {
        // The unbounded container has infinite remaining volume and 0 × ∞ is NaN.
        if self.void_fill_density.is_zero() {
            return Weight::new(0.0, self.void_fill_density.weight().unit());
        }
        self.remaining_volume() * self.void_fill_density
    }

    /// Share of the usable volume taken by items, in percent.
    ///
    /// # Returns
    /// `0.0` when the usable volume is zero or unbounded
    pub fn utilization_percent(&self) -> f64 {
        let usable = self.container.usable_volume().canonical_value();
        if usable <= 0.0 || !usable.is_finite() {
            return 0.0;
        }
        self.used_volume().canonical_value() / usable * 100.0
    }
}

impl Default for Package {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Dimensional for Package {
    fn dimensions(&self) -> [Length; 3] {
        self.container.dimensions()
    }
}

/// Container weight plus the weight of all items.
impl Weighted for Package {
    fn weight(&self) -> Weight {
        self.container.weight() + self.items_weight()
    }
}

impl HoldsItems for Package {
    fn items(&self) -> &[Arc<Item>] {
        &self.items
    }

    fn add_item(&mut self, item: Arc<Item>) -> &mut Self {
        self.items.push(item);
        debug!(package = %self.id, items = self.items.len(), "Item added");
        self
    }

    fn remove_item(&mut self, item: &Arc<Item>) -> Option<Arc<Item>> {
        let index = self
            .items
            .iter()
            .position(|held| Arc::ptr_eq(held, item))?;
        let removed = self.items.remove(index);
        debug!(package = %self.id, items = self.items.len(), "Item removed");
        Some(removed)
    }
}

#[derive(Clone, Debug)]
pub struct PackageBuilder {
    id: Option<String>,
    container: Option<Container>,
    items: Vec<Arc<Item>>,
    void_fill_density: Density,
}

impl PackageBuilder {
    pub(crate) fn new(config: &PhysicalConfig) -> Self {
        Self {
            id: None,
            container: None,
            items: Vec::new(),
            void_fill_density: config.void_fill_density,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn container(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }

    /// Appends a single item.
    pub fn item(mut self, item: impl Into<Arc<Item>>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Appends items in iteration order.
    pub fn items(mut self, items: impl IntoIterator<Item = impl Into<Arc<Item>>>) -> Self {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn void_fill_density(mut self, density: Density) -> Self {
        self.void_fill_density = density;
        self
    }

    /// Builds the package, generating a UUID if no id was set.
    pub fn build(self) -> Package {
        self.build_with(&UuidGenerator)
    }

    /// Builds the package, asking `ids` for an id if none was set.
    pub fn build_with(self, ids: &dyn IdGenerator) -> Package {
        let generated = self.id.is_none();
        let id = self.id.unwrap_or_else(|| ids.next_id());
        debug!(package = %id, generated, items = self.items.len(), "Package created");

        Package {
            id,
            container: self.container.unwrap_or_else(Container::unbounded),
            items: self.items,
            void_fill_density: self.void_fill_density,
        }
    }
}
