//! Capability traits shared by cuboids, containers and packages.
//!
//! Geometry and weight are exposed through small traits instead of a type
//! hierarchy: a `Package` is `Dimensional` because it forwards to its
//! container, not because it stores dimensions of its own.

use std::sync::Arc;

use crate::model::Item;
use crate::units::{Length, Volume, Weight};

/// Global numerical tolerance for floating-point comparisons.
///
/// Used for dimension and weight comparisons in canonical units.
pub const EPSILON_GENERAL: f64 = 1e-6;

/// Sorts three lengths from largest to smallest.
pub fn sort_descending(mut dims: [Length; 3]) -> [Length; 3] {
    dims.sort_by(|a, b| b.canonical_value().total_cmp(&a.canonical_value()));
    dims
}

/// Trait for objects with three outer dimensions.
pub trait Dimensional {
    /// Returns the three dimensions in construction order.
    fn dimensions(&self) -> [Length; 3];

    /// Product of the three dimensions in milliliters.
    fn volume(&self) -> Volume {
        let [a, b, c] = self.dimensions();
        a * b * c
    }

    /// Largest dimension.
    fn length(&self) -> Length {
        sort_descending(self.dimensions())[0]
    }

    /// Middle dimension.
    fn width(&self) -> Length {
        sort_descending(self.dimensions())[1]
    }

    /// Smallest dimension.
    fn depth(&self) -> Length {
        sort_descending(self.dimensions())[2]
    }

    /// Checks whether the object fits inside `bounds` in some axis-aligned
    /// orientation.
    ///
    /// Only compares extents; says nothing about where other contents sit.
    fn fits_within(&self, bounds: &[Length; 3]) -> bool {
        let own = sort_descending(self.dimensions());
        let outer = sort_descending(*bounds);
        own.iter()
            .zip(outer.iter())
            .all(|(a, b)| a.canonical_value() <= b.canonical_value() + EPSILON_GENERAL)
    }
}

/// Trait for objects with weight.
pub trait Weighted {
    /// Returns the weight in grams.
    fn weight(&self) -> Weight;
}

/// Trait for containers that model a usable interior.
pub trait InnerGeometry: Dimensional {
    /// Interior dimensions, or `None` if no interior is modeled.
    fn inner_dimensions(&self) -> Option<[Length; 3]>;

    /// Interior volume; zero when no interior is modeled.
    fn inner_volume(&self) -> Volume {
        match self.inner_dimensions() {
            Some([a, b, c]) => a * b * c,
            None => Volume::zero(),
        }
    }

    /// Volume available for contents: the interior if modeled, else the
    /// outer volume.
    fn usable_volume(&self) -> Volume {
        match self.inner_dimensions() {
            Some(_) => self.inner_volume(),
            None => self.volume(),
        }
    }
}

/// Trait for aggregates that hold an ordered list of items.
///
/// Items are compared by identity (`Arc::ptr_eq`), so the same item may be
/// held more than once.
pub trait HoldsItems {
    /// Items in insertion order.
    fn items(&self) -> &[Arc<Item>];

    /// Appends `item` at the end.
    fn add_item(&mut self, item: Arc<Item>) -> &mut Self;

    /// Removes the first occurrence of `item`, returning it if present.
    fn remove_item(&mut self, item: &Arc<Item>) -> Option<Arc<Item>>;

    fn item_count(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Sum of item volumes.
    fn used_volume(&self) -> Volume {
        self.items().iter().map(|item| item.volume()).sum()
    }

    /// Sum of item weights.
    fn items_weight(&self) -> Weight {
        self.items().iter().map(|item| item.weight()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::LengthUnit;

    fn cm(values: [f64; 3]) -> [Length; 3] {
        values.map(|v| Length::new(v, LengthUnit::Centimeter))
    }

    struct Plain([Length; 3]);

    impl Dimensional for Plain {
        fn dimensions(&self) -> [Length; 3] {
            self.0
        }
    }

    #[test]
    fn test_sort_descending() {
        let sorted = sort_descending(cm([1.0, 3.0, 2.0]));
        assert_eq!(sorted, cm([3.0, 2.0, 1.0]));
    }

    #[test]
    fn test_length_width_depth_are_ordered() {
        let plain = Plain(cm([1.0, 2.0, 3.0]));
        assert_eq!(plain.length(), Length::new(3.0, LengthUnit::Centimeter));
        assert_eq!(plain.width(), Length::new(2.0, LengthUnit::Centimeter));
        assert_eq!(plain.depth(), Length::new(1.0, LengthUnit::Centimeter));
        assert_eq!(plain.dimensions(), cm([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_fits_within_any_orientation() {
        let plain = Plain(cm([5.0, 1.0, 2.0]));
        assert!(plain.fits_within(&cm([2.0, 5.0, 1.0])));
        assert!(plain.fits_within(&cm([10.0, 10.0, 10.0])));
        assert!(!plain.fits_within(&cm([4.0, 4.0, 4.0])));
        assert!(plain.fits_within(&cm([f64::INFINITY; 3])));
    }
}
