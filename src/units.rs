//! Typed physical quantities with unit conversion.
//!
//! Every quantity keeps the magnitude and the unit it was created with.
//! Arithmetic converts the right operand into the unit of the left operand,
//! and equality/ordering compare magnitudes in the canonical unit of the
//! kind, so `1 m == 100 cm`.
//!
//! Canonical units are centimeters, grams and milliliters (1 ml = 1 cm³).
//!
//! # Examples
//! ```
//! use physical::units::{Length, LengthUnit, Volume, VolumeUnit};
//!
//! let side = Length::new(1.0, LengthUnit::Inch);
//! let cube: Volume = side * side * side;
//! assert!(cube.approx_eq(&Volume::new(16.387064, VolumeUnit::Milliliter), 1e-9));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::{PhysicalError, QuantityKind};

macro_rules! unit_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:expr, canonical = $canonical:ident;
        $( $variant:ident => $symbol:literal, $factor:expr, [$($alias:literal),*] );+ $(;)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Unit every magnitude of this kind is normalized to.
            pub const CANONICAL: $name = $name::$canonical;

            /// Number of canonical units in one of this unit.
            #[inline]
            pub const fn factor(self) -> f64 {
                match self {
                    $($name::$variant => $factor),+
                }
            }

            /// Short symbol, also accepted by `FromStr`.
            #[inline]
            pub const fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.symbol())
            }
        }

        impl FromStr for $name {
            type Err = PhysicalError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase();
                match normalized.as_str() {
                    $($symbol $(| $alias)* => Ok($name::$variant),)+
                    _ => Err(PhysicalError::unknown_unit($kind, s.trim())),
                }
            }
        }
    };
}

unit_enum! {
    /// Units of length.
    LengthUnit, QuantityKind::Length, canonical = Centimeter;
    Millimeter => "mm", 0.1, ["millimeter", "millimeters"];
    Centimeter => "cm", 1.0, ["centimeter", "centimeters"];
    Meter => "m", 100.0, ["meter", "meters"];
    Inch => "in", 2.54, ["inch", "inches"];
    Foot => "ft", 30.48, ["foot", "feet"];
}

unit_enum! {
    /// Units of weight.
    WeightUnit, QuantityKind::Weight, canonical = Gram;
    Milligram => "mg", 0.001, ["milligram", "milligrams"];
    Gram => "g", 1.0, ["gram", "grams"];
    Kilogram => "kg", 1000.0, ["kilogram", "kilograms"];
    Ounce => "oz", 28.349523125, ["ounce", "ounces"];
    Pound => "lb", 453.59237, ["lbs", "pound", "pounds"];
}

unit_enum! {
    /// Units of volume.
    VolumeUnit, QuantityKind::Volume, canonical = Milliliter;
    Milliliter => "ml", 1.0, ["cm3", "milliliter", "milliliters"];
    Liter => "l", 1000.0, ["liter", "liters"];
    CubicInch => "in3", 16.387064, ["cubic_inch", "cubic_inches"];
    CubicFoot => "ft3", 28316.846592, ["cubic_foot", "cubic_feet"];
}

macro_rules! quantity {
    ($(#[$meta:meta])* $name:ident, $unit:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
        pub struct $name {
            value: f64,
            unit: $unit,
        }

        impl $name {
            #[inline]
            #[must_use]
            pub const fn new(value: f64, unit: $unit) -> Self {
                Self { value, unit }
            }

            /// Creates a quantity, rejecting NaN magnitudes.
            ///
            /// Infinite and negative magnitudes are accepted.
            pub fn try_new(value: f64, unit: $unit) -> Result<Self, PhysicalError> {
                if value.is_nan() {
                    return Err(PhysicalError::invalid_magnitude($kind, value.to_string()));
                }
                Ok(Self::new(value, unit))
            }

            /// Zero in the canonical unit.
            #[inline]
            pub const fn zero() -> Self {
                Self::new(0.0, $unit::CANONICAL)
            }

            #[inline]
            pub const fn value(&self) -> f64 {
                self.value
            }

            #[inline]
            pub const fn unit(&self) -> $unit {
                self.unit
            }

            /// Converts to another unit of the same kind.
            pub fn convert_to(&self, unit: $unit) -> Self {
                if unit == self.unit {
                    return *self;
                }
                Self::new(self.value * self.unit.factor() / unit.factor(), unit)
            }

            /// Converts to the canonical unit.
            #[inline]
            pub fn to_canonical(&self) -> Self {
                self.convert_to($unit::CANONICAL)
            }

            /// Magnitude in the canonical unit.
            #[inline]
            pub fn canonical_value(&self) -> f64 {
                self.to_canonical().value
            }

            /// Compares canonical magnitudes within an absolute tolerance.
            ///
            /// Infinite magnitudes of the same sign are equal.
            pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
                let (a, b) = (self.canonical_value(), other.canonical_value());
                a == b || (a - b).abs() <= epsilon
            }

            #[inline]
            pub fn is_zero(&self) -> bool {
                self.value == 0.0
            }

            #[inline]
            pub fn is_finite(&self) -> bool {
                self.value.is_finite()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.canonical_value() == other.canonical_value()
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                self.canonical_value().partial_cmp(&other.canonical_value())
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self::new(self.value + rhs.convert_to(self.unit).value, self.unit)
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self::new(self.value - rhs.convert_to(self.unit).value, self.unit)
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                Self::new(-self.value, self.unit)
            }
        }

        impl Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::zero(), Add::add)
            }
        }

        impl<'a> Sum<&'a $name> for $name {
            fn sum<I: Iterator<Item = &'a $name>>(iter: I) -> Self {
                iter.copied().sum()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", self.value, self.unit)
            }
        }

        /// Parses `"<magnitude> <unit>"`, e.g. `"12.5 cm"`.
        impl FromStr for $name {
            type Err = PhysicalError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let (magnitude, symbol) = s
                    .trim()
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| PhysicalError::invalid_magnitude($kind, s.trim()))?;
                let value = magnitude
                    .parse::<f64>()
                    .map_err(|_| PhysicalError::invalid_magnitude($kind, magnitude))?;
                let unit = symbol.parse::<$unit>()?;
                Self::try_new(value, unit)
            }
        }
    };
}

quantity! {
    /// A length, e.g. one edge of a cuboid.
    Length, LengthUnit, QuantityKind::Length
}

quantity! {
    /// A weight (mass).
    Weight, WeightUnit, QuantityKind::Weight
}

quantity! {
    /// A volume.
    Volume, VolumeUnit, QuantityKind::Volume
}

/// An area in square centimeters.
///
/// Only exists as the intermediate of `Length × Length`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Area(f64);

impl Area {
    #[inline]
    pub const fn square_centimeters(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Mul for Length {
    type Output = Area;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Area(self.canonical_value() * rhs.canonical_value())
    }
}

impl Mul<Length> for Area {
    type Output = Volume;

    #[inline]
    fn mul(self, rhs: Length) -> Self::Output {
        Volume::new(self.0 * rhs.canonical_value(), VolumeUnit::Milliliter)
    }
}

/// Weight per one unit of volume.
///
/// Void-fill material is described as a weight per milliliter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Density {
    weight: Weight,
    per: VolumeUnit,
}

impl Density {
    #[inline]
    pub const fn new(weight: Weight, per: VolumeUnit) -> Self {
        Self { weight, per }
    }

    #[inline]
    pub const fn per_milliliter(weight: Weight) -> Self {
        Self::new(weight, VolumeUnit::Milliliter)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::per_milliliter(Weight::zero())
    }

    #[inline]
    pub const fn weight(&self) -> Weight {
        self.weight
    }

    #[inline]
    pub const fn per(&self) -> VolumeUnit {
        self.per
    }

    /// Grams per milliliter.
    pub fn canonical_value(&self) -> f64 {
        self.weight.canonical_value() / self.per.factor()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.weight.is_zero()
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Density {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_value() == other.canonical_value()
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.weight, self.per)
    }
}

/// Parses `"<magnitude> <weight unit>/<volume unit>"`, e.g. `"7 mg/ml"`.
impl FromStr for Density {
    type Err = PhysicalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (weight, per) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| PhysicalError::invalid_magnitude(QuantityKind::Density, s.trim()))?;
        Ok(Self::new(weight.parse()?, per.parse()?))
    }
}

impl Mul<Density> for Volume {
    type Output = Weight;

    /// The result is expressed in the density's weight unit.
    #[inline]
    fn mul(self, rhs: Density) -> Self::Output {
        let volume = self.convert_to(rhs.per).value();
        Weight::new(volume * rhs.weight.value(), rhs.weight.unit())
    }
}

impl Mul<Volume> for Density {
    type Output = Weight;

    #[inline]
    fn mul(self, rhs: Volume) -> Self::Output {
        rhs * self
    }
}
