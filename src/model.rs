//! Data models for physical goods and their containers.
//!
//! This module defines the value types the package aggregate is built from:
//! - `Cuboid`: three normalized dimensions plus a normalized weight
//! - `Item`: a single physical good
//! - `Container`: a cuboid shell with an optional usable interior
//!
//! All structures implement the traits from the `types` module.

use serde::Serialize;
use tracing::warn;

use crate::config::PhysicalConfig;
use crate::error::PhysicalError;
use crate::types::{Dimensional, InnerGeometry, Weighted};
use crate::units::{Length, LengthUnit, Weight, WeightUnit};

/// Converts up to three raw magnitudes to canonical lengths, padding missing
/// trailing entries with `default_length` given in the same `unit`.
///
/// More than three magnitudes are not a recognized input; only the first
/// three are used.
fn normalize_dimensions(
    values: &[f64],
    unit: LengthUnit,
    default_length: f64,
) -> Result<[Length; 3], PhysicalError> {
    if values.len() > 3 {
        warn!(
            supplied = values.len(),
            "More than three dimensions supplied, ignoring the rest"
        );
    }

    let mut dims = [Length::zero(); 3];
    for (index, slot) in dims.iter_mut().enumerate() {
        let raw = values.get(index).copied().unwrap_or(default_length);
        *slot = Length::try_new(raw, unit)?.to_canonical();
    }
    Ok(dims)
}

/// Rectangular prism with dimensions in centimeters and weight in grams.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cuboid {
    dimensions: [Length; 3],
    weight: Weight,
}

impl Cuboid {
    /// Creates a builder that pads missing dimensions with `default_length`.
    pub fn builder(default_length: f64) -> CuboidBuilder {
        CuboidBuilder::new(default_length, &PhysicalConfig::default())
    }
}

impl Dimensional for Cuboid {
    fn dimensions(&self) -> [Length; 3] {
        self.dimensions
    }
}

impl Weighted for Cuboid {
    fn weight(&self) -> Weight {
        self.weight
    }
}

/// Builder for `Cuboid`, mirroring the raw inputs a caller has at hand:
/// magnitudes plus the units they are expressed in.
#[derive(Clone, Debug)]
pub struct CuboidBuilder {
    dimensions: Vec<f64>,
    dimension_unit: LengthUnit,
    weight: f64,
    weight_unit: WeightUnit,
    default_length: f64,
}

impl CuboidBuilder {
    pub(crate) fn new(default_length: f64, config: &PhysicalConfig) -> Self {
        Self {
            dimensions: Vec::new(),
            dimension_unit: config.dimension_unit,
            weight: 0.0,
            weight_unit: config.weight_unit,
            default_length,
        }
    }

    /// Sets up to three raw dimension magnitudes.
    pub fn dimensions(mut self, values: impl AsRef<[f64]>) -> Self {
        self.dimensions = values.as_ref().to_vec();
        self
    }

    /// Sets the unit of the dimensions and of the default length.
    pub fn dimension_unit(mut self, unit: LengthUnit) -> Self {
        self.dimension_unit = unit;
        self
    }

    pub fn weight(mut self, value: f64) -> Self {
        self.weight = value;
        self
    }

    pub fn weight_unit(mut self, unit: WeightUnit) -> Self {
        self.weight_unit = unit;
        self
    }

    /// Overrides the length used for missing dimensions.
    pub fn default_length(mut self, value: f64) -> Self {
        self.default_length = value;
        self
    }

    /// Normalizes the inputs into a `Cuboid`.
    ///
    /// # Examples
    /// ```
    /// use physical::model::Cuboid;
    /// use physical::types::Dimensional;
    /// use physical::units::{Length, LengthUnit};
    ///
    /// let cuboid = Cuboid::builder(0.0)
    ///     .dimensions([10.0, 20.0])
    ///     .dimension_unit(LengthUnit::Millimeter)
    ///     .build()
    ///     .unwrap();
    /// let width = Length::new(2.0, LengthUnit::Centimeter);
    /// assert!(cuboid.dimensions()[1].approx_eq(&width, 1e-9));
    /// assert!(cuboid.volume().is_zero());
    /// ```
    pub fn build(self) -> Result<Cuboid, PhysicalError> {
        let weight = Weight::try_new(self.weight, self.weight_unit)?.to_canonical();
        let dimensions =
            normalize_dimensions(&self.dimensions, self.dimension_unit, self.default_length)?;
        Ok(Cuboid { dimensions, weight })
    }
}

/// Delegates the shared cuboid setters to an inner `CuboidBuilder`.
macro_rules! cuboid_setters {
    ($field:ident) => {
        /// Sets up to three raw dimension magnitudes.
        pub fn dimensions(mut self, values: impl AsRef<[f64]>) -> Self {
            self.$field = self.$field.dimensions(values);
            self
        }

        /// Sets the unit of the dimensions and of the default length.
        pub fn dimension_unit(mut self, unit: LengthUnit) -> Self {
            self.$field = self.$field.dimension_unit(unit);
            self
        }

        pub fn weight(mut self, value: f64) -> Self {
            self.$field = self.$field.weight(value);
            self
        }

        pub fn weight_unit(mut self, unit: WeightUnit) -> Self {
            self.$field = self.$field.weight_unit(unit);
            self
        }

        /// Overrides the length used for missing dimensions.
        pub fn default_length(mut self, value: f64) -> Self {
            self.$field = self.$field.default_length(value);
            self
        }
    };
}

/// A single physical good.
///
/// # Examples
/// ```
/// use physical::model::Item;
/// use physical::types::{Dimensional, Weighted};
/// use physical::units::{Volume, VolumeUnit, Weight, WeightUnit};
///
/// let item = Item::builder()
///     .dimensions([2.0, 2.0, 2.0])
///     .weight(0.2)
///     .weight_unit(WeightUnit::Pound)
///     .build()
///     .unwrap();
/// assert_eq!(item.volume(), Volume::new(8.0, VolumeUnit::Milliliter));
/// assert!(item.weight().approx_eq(&Weight::new(90.718474, WeightUnit::Gram), 1e-9));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Item {
    cuboid: Cuboid,
}

impl Item {
    pub fn new(cuboid: Cuboid) -> Self {
        Self { cuboid }
    }

    /// Builder using the default configuration (missing dimensions are 0).
    pub fn builder() -> ItemBuilder {
        PhysicalConfig::default().item_builder()
    }

    pub fn cuboid(&self) -> &Cuboid {
        &self.cuboid
    }
}

impl Dimensional for Item {
    fn dimensions(&self) -> [Length; 3] {
        self.cuboid.dimensions()
    }
}

impl Weighted for Item {
    fn weight(&self) -> Weight {
        self.cuboid.weight()
    }
}

#[derive(Clone, Debug)]
pub struct ItemBuilder {
    cuboid: CuboidBuilder,
}

impl ItemBuilder {
    pub(crate) fn new(config: &PhysicalConfig) -> Self {
        Self {
            cuboid: CuboidBuilder::new(config.item_default_length, config),
        }
    }

    cuboid_setters!(cuboid);

    pub fn build(self) -> Result<Item, PhysicalError> {
        Ok(Item::new(self.cuboid.build()?))
    }
}

/// A container shell with outer (shipping) dimensions and an optional
/// interior cavity.
///
/// # Fields
/// * `cuboid` - Outer dimensions and tare weight
/// * `inner_dimensions` - Usable interior, or `None` if not modeled
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Container {
    cuboid: Cuboid,
    inner_dimensions: Option<[Length; 3]>,
}

impl Container {
    /// Builder using the default configuration (missing dimensions are
    /// infinite).
    pub fn builder() -> ContainerBuilder {
        PhysicalConfig::default().container_builder()
    }

    /// Container without bounds: infinite outer dimensions, zero weight and
    /// no interior.
    pub fn unbounded() -> Self {
        Self {
            cuboid: Cuboid {
                dimensions: [Length::new(f64::INFINITY, LengthUnit::CANONICAL); 3],
                weight: Weight::zero(),
            },
            inner_dimensions: None,
        }
    }

    pub fn cuboid(&self) -> &Cuboid {
        &self.cuboid
    }

    /// Checks whether `item` fits inside the interior, or inside the outer
    /// dimensions if no interior is modeled.
    pub fn can_hold(&self, item: &Item) -> bool {
        let bounds = self.inner_dimensions.unwrap_or_else(|| self.dimensions());
        item.fits_within(&bounds)
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Dimensional for Container {
    fn dimensions(&self) -> [Length; 3] {
        self.cuboid.dimensions()
    }
}

impl Weighted for Container {
    fn weight(&self) -> Weight {
        self.cuboid.weight()
    }
}

impl InnerGeometry for Container {
    fn inner_dimensions(&self) -> Option<[Length; 3]> {
        self.inner_dimensions
    }
}

#[derive(Clone, Debug)]
pub struct ContainerBuilder {
    cuboid: CuboidBuilder,
    inner_dimensions: Option<Vec<f64>>,
}

impl ContainerBuilder {
    pub(crate) fn new(config: &PhysicalConfig) -> Self {
        Self {
            cuboid: CuboidBuilder::new(config.container_default_length, config),
            inner_dimensions: None,
        }
    }

    cuboid_setters!(cuboid);

    /// Sets up to three raw interior magnitudes, in the dimension unit.
    pub fn inner_dimensions(mut self, values: impl AsRef<[f64]>) -> Self {
        self.inner_dimensions = Some(values.as_ref().to_vec());
        self
    }

    pub fn build(self) -> Result<Container, PhysicalError> {
        let inner_dimensions = match &self.inner_dimensions {
            Some(values) => Some(normalize_dimensions(
                values,
                self.cuboid.dimension_unit,
                self.cuboid.default_length,
            )?),
            None => None,
        };
        Ok(Container {
            cuboid: self.cuboid.build()?,
            inner_dimensions,
        })
    }
}
