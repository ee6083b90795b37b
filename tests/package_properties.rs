//! Property tests for dimension normalization and package aggregation.

use std::collections::HashSet;
use std::sync::Arc;

use physical::types::EPSILON_GENERAL;
use physical::units::{Density, Length, LengthUnit, Volume, Weight, WeightUnit};
use physical::{Container, Dimensional, HoldsItems, InnerGeometry, Item, Package, Weighted};
use proptest::prelude::*;

fn length_unit() -> impl Strategy<Value = LengthUnit> {
    prop_oneof![
        Just(LengthUnit::Millimeter),
        Just(LengthUnit::Centimeter),
        Just(LengthUnit::Meter),
        Just(LengthUnit::Inch),
        Just(LengthUnit::Foot),
    ]
}

fn weight_unit() -> impl Strategy<Value = WeightUnit> {
    prop_oneof![
        Just(WeightUnit::Milligram),
        Just(WeightUnit::Gram),
        Just(WeightUnit::Kilogram),
        Just(WeightUnit::Ounce),
        Just(WeightUnit::Pound),
    ]
}

fn item_dims() -> impl Strategy<Value = [f64; 3]> {
    [0.1f64..50.0, 0.1f64..50.0, 0.1f64..50.0]
}

fn item_from(dims: [f64; 3], weight: f64) -> Arc<Item> {
    let item = Item::builder()
        .dimensions(dims)
        .weight(weight)
        .build()
        .expect("finite inputs");
    Arc::new(item)
}

/// Absolute tolerance scaled to the magnitude being compared.
fn tolerance(magnitude: f64) -> f64 {
    EPSILON_GENERAL * magnitude.abs().max(1.0)
}

proptest! {
    /// Property: any 0..=3 supplied dimensions yield exactly three canonical
    /// lengths, padded with the default length taken in the input unit.
    #[test]
    fn prop_dimensions_are_padded_to_three(
        values in prop::collection::vec(0.1f64..100.0, 0..=3),
        unit in length_unit(),
        default in 0.0f64..10.0,
    ) {
        let container = Container::builder()
            .dimensions(&values)
            .dimension_unit(unit)
            .default_length(default)
            .build()
            .expect("finite inputs");

        let dims = container.dimensions();
        for (index, dim) in dims.iter().enumerate() {
            prop_assert_eq!(dim.unit(), LengthUnit::Centimeter);
            let expected = Length::new(values.get(index).copied().unwrap_or(default), unit);
            prop_assert!(dim.approx_eq(&expected, tolerance(expected.canonical_value())));
        }
    }

    /// Property: the same physical cuboid has the same volume in any unit.
    #[test]
    fn prop_volume_is_unit_independent(dims in item_dims(), unit in length_unit()) {
        let metric = Item::builder().dimensions(dims).build().expect("finite inputs");

        let factor = unit.factor();
        let converted = Item::builder()
            .dimensions(dims.map(|cm| cm / factor))
            .dimension_unit(unit)
            .build()
            .expect("finite inputs");

        let volume = metric.volume();
        prop_assert!(volume.approx_eq(&converted.volume(), tolerance(volume.canonical_value())));
    }

    /// Property: adding an item and removing it again restores the item list.
    #[test]
    fn prop_add_then_remove_restores_items(
        existing in prop::collection::vec(item_dims(), 0..8),
        extra in item_dims(),
    ) {
        let mut package = Package::builder()
            .items(existing.into_iter().map(|dims| item_from(dims, 1.0)))
            .build();
        let before: Vec<Arc<Item>> = package.items().to_vec();

        let item = item_from(extra, 1.0);
        package.add_item(Arc::clone(&item));
        prop_assert_eq!(package.item_count(), before.len() + 1);
        prop_assert!(Arc::ptr_eq(&package.items()[before.len()], &item));

        let removed = package.remove_item(&item);
        prop_assert!(removed.is_some());
        prop_assert_eq!(package.item_count(), before.len());
        for (held, original) in package.items().iter().zip(&before) {
            prop_assert!(Arc::ptr_eq(held, original));
        }
    }

    /// Property: package weight is container weight plus every item weight.
    #[test]
    fn prop_weight_is_container_plus_items(
        tare in 0.0f64..500.0,
        unit in weight_unit(),
        weights in prop::collection::vec(0.0f64..500.0, 0..10),
    ) {
        let container = Container::builder()
            .weight(tare)
            .weight_unit(unit)
            .build()
            .expect("finite inputs");
        let items: Vec<Arc<Item>> = weights
            .iter()
            .map(|&w| {
                Arc::new(
                    Item::builder()
                        .weight(w)
                        .weight_unit(unit)
                        .build()
                        .expect("finite inputs"),
                )
            })
            .collect();
        let package = Package::builder().container(container).items(items).build();

        let expected = Weight::new(tare + weights.iter().sum::<f64>(), unit);
        let total = package.weight();
        prop_assert!(total.approx_eq(&expected, tolerance(expected.canonical_value())));
        if weights.is_empty() {
            prop_assert_eq!(total, package.tare_weight());
        }
    }

    /// Property: remaining volume plus used volume is the usable volume.
    #[test]
    fn prop_remaining_volume_is_usable_minus_used(
        outer in [1.0f64..100.0, 1.0f64..100.0, 1.0f64..100.0],
        inner in prop::option::of([1.0f64..50.0, 1.0f64..50.0, 1.0f64..50.0]),
        items in prop::collection::vec(item_dims(), 0..6),
    ) {
        let mut builder = Container::builder().dimensions(outer);
        if let Some(inner) = inner {
            builder = builder.inner_dimensions(inner);
        }
        let container = builder.build().expect("finite inputs");
        let usable = container.usable_volume();
        match inner {
            Some(_) => prop_assert_eq!(usable, container.inner_volume()),
            None => prop_assert_eq!(usable, container.volume()),
        }

        let package = Package::builder()
            .container(container)
            .items(items.into_iter().map(|dims| item_from(dims, 0.0)))
            .build();

        let expected: Volume = usable - package.used_volume();
        let remaining = package.remaining_volume();
        prop_assert!(remaining.approx_eq(&expected, tolerance(usable.canonical_value())));
        if package.is_empty() {
            prop_assert_eq!(remaining, usable);
        }
    }

    /// Property: without void-fill density there is no void-fill weight.
    #[test]
    fn prop_zero_density_means_no_void_fill(
        outer in prop::option::of([1.0f64..100.0, 1.0f64..100.0, 1.0f64..100.0]),
        items in prop::collection::vec(item_dims(), 0..6),
    ) {
        let container = match outer {
            Some(dims) => Container::builder().dimensions(dims).build().expect("finite inputs"),
            None => Container::unbounded(),
        };
        let package = Package::builder()
            .container(container)
            .items(items.into_iter().map(|dims| item_from(dims, 0.0)))
            .void_fill_density(Density::zero())
            .build();

        prop_assert!(package.void_fill_weight().is_zero());
    }

    /// Property: void-fill weight is remaining volume times density.
    #[test]
    fn prop_void_fill_weight_scales_with_remaining_volume(
        outer in [1.0f64..100.0, 1.0f64..100.0, 1.0f64..100.0],
        items in prop::collection::vec(item_dims(), 0..6),
        grams_per_ml in 0.001f64..2.0,
    ) {
        let container = Container::builder().dimensions(outer).build().expect("finite inputs");
        let package = Package::builder()
            .container(container)
            .items(items.into_iter().map(|dims| item_from(dims, 0.0)))
            .void_fill_density(Density::per_milliliter(Weight::new(grams_per_ml, WeightUnit::Gram)))
            .build();

        let expected = Weight::new(package.remaining_volume().canonical_value() * grams_per_ml, WeightUnit::Gram);
        let actual = package.void_fill_weight();
        prop_assert!(actual.approx_eq(&expected, tolerance(expected.canonical_value())));
    }

    /// Property: packages built without an id never share one.
    #[test]
    fn prop_generated_ids_are_unique(count in 2usize..32) {
        let ids: HashSet<String> = (0..count)
            .map(|_| Package::default().id().to_string())
            .collect();
        prop_assert_eq!(ids.len(), count);
    }
}

#[test]
fn scenario_inner_cube_filled_by_one_item() {
    let container = Container::builder()
        .dimensions([1.0, 2.0, 3.0])
        .inner_dimensions([1.0, 1.0, 1.0])
        .build()
        .expect("finite inputs");
    let package = Package::builder()
        .container(container)
        .item(item_from([1.0, 1.0, 1.0], 0.0))
        .build();

    assert!(package.remaining_volume().is_zero());
}

#[test]
fn scenario_two_pounds_total() {
    let container = Container::builder()
        .weight(0.8)
        .weight_unit(WeightUnit::Pound)
        .build()
        .expect("finite inputs");
    let items = [0.2, 1.0].map(|lb| {
        Item::builder()
            .weight(lb)
            .weight_unit(WeightUnit::Pound)
            .build()
            .expect("finite inputs")
    });
    let package = Package::builder().container(container).items(items).build();

    assert!(package
        .weight()
        .approx_eq(&Weight::new(2.0, WeightUnit::Pound), EPSILON_GENERAL));
}
