use std::env;
use std::fmt::Display;

use tracing::{info, warn};

use crate::error::PhysicalError;
use crate::model::{ContainerBuilder, ItemBuilder};
use crate::package::PackageBuilder;
use crate::units::{Density, LengthUnit, Weight, WeightUnit};

/// Defaults applied when constructing items, containers and packages.
///
/// Loaded from environment variables or default values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalConfig {
    /// Length for missing item dimensions, in the caller's dimension unit
    pub item_default_length: f64,
    /// Length for missing container dimensions, in the caller's dimension unit
    pub container_default_length: f64,
    /// Dimension unit assumed when the caller does not name one
    pub dimension_unit: LengthUnit,
    /// Weight unit assumed when the caller does not name one
    pub weight_unit: WeightUnit,
    /// Void-fill density for packages that do not set one
    pub void_fill_density: Density,
}

impl PhysicalConfig {
    pub const DEFAULT_ITEM_LENGTH: f64 = 0.0;
    pub const DEFAULT_CONTAINER_LENGTH: f64 = f64::INFINITY;
    pub const DEFAULT_DIMENSION_UNIT: LengthUnit = LengthUnit::Centimeter;
    pub const DEFAULT_WEIGHT_UNIT: WeightUnit = WeightUnit::Gram;
    pub const DEFAULT_VOID_FILL_DENSITY: Density = Density::zero();

    const ITEM_LENGTH_VAR: &'static str = "PHYSICAL_ITEM_DEFAULT_LENGTH";
    const CONTAINER_LENGTH_VAR: &'static str = "PHYSICAL_CONTAINER_DEFAULT_LENGTH";
    const DIMENSION_UNIT_VAR: &'static str = "PHYSICAL_DIMENSION_UNIT";
    const WEIGHT_UNIT_VAR: &'static str = "PHYSICAL_WEIGHT_UNIT";
    const VOID_FILL_DENSITY_VAR: &'static str = "PHYSICAL_VOID_FILL_DENSITY";

    /// Creates a builder for a custom configuration.
    pub fn builder() -> PhysicalConfigBuilder {
        PhysicalConfigBuilder::default()
    }

    /// Creates a configuration from the currently available environment
    /// variables. Invalid values fall back to the default with a warning.
    pub fn from_env() -> Self {
        let item_default_length = load_with_warning(
            Self::ITEM_LENGTH_VAR,
            Self::DEFAULT_ITEM_LENGTH,
            str::parse::<f64>,
            |value| *value >= 0.0,
            "must not be negative",
        );

        let container_default_length = load_with_warning(
            Self::CONTAINER_LENGTH_VAR,
            Self::DEFAULT_CONTAINER_LENGTH,
            str::parse::<f64>,
            |value| *value >= 0.0,
            "must not be negative",
        );

        let dimension_unit = load_with_warning(
            Self::DIMENSION_UNIT_VAR,
            Self::DEFAULT_DIMENSION_UNIT,
            str::parse::<LengthUnit>,
            |_| true,
            "must be a length unit",
        );

        let weight_unit = load_with_warning(
            Self::WEIGHT_UNIT_VAR,
            Self::DEFAULT_WEIGHT_UNIT,
            str::parse::<WeightUnit>,
            |_| true,
            "must be a weight unit",
        );

        let void_fill_density = load_with_warning(
            Self::VOID_FILL_DENSITY_VAR,
            Self::DEFAULT_VOID_FILL_DENSITY,
            parse_density,
            |density| density.canonical_value().is_finite() && density.canonical_value() >= 0.0,
            "must be finite and not negative",
        );

        Self::builder()
            .item_default_length(item_default_length)
            .container_default_length(container_default_length)
            .dimension_unit(dimension_unit)
            .weight_unit(weight_unit)
            .void_fill_density(void_fill_density)
            .build()
    }

    /// Loads a `.env` file if present, then reads the environment.
    pub fn from_dotenv() -> Self {
        if let Err(err) = dotenvy::dotenv() {
            if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
            {
                warn!(error = %err, "Could not load .env");
            }
        }
        Self::from_env()
    }

    /// Item builder using these defaults.
    pub fn item_builder(&self) -> ItemBuilder {
        ItemBuilder::new(self)
    }

    /// Container builder using these defaults.
    pub fn container_builder(&self) -> ContainerBuilder {
        ContainerBuilder::new(self)
    }

    /// Package builder using these defaults.
    pub fn package_builder(&self) -> PackageBuilder {
        PackageBuilder::new(self)
    }
}

impl Default for PhysicalConfig {
    fn default() -> Self {
        Self {
            item_default_length: Self::DEFAULT_ITEM_LENGTH,
            container_default_length: Self::DEFAULT_CONTAINER_LENGTH,
            dimension_unit: Self::DEFAULT_DIMENSION_UNIT,
            weight_unit: Self::DEFAULT_WEIGHT_UNIT,
            void_fill_density: Self::DEFAULT_VOID_FILL_DENSITY,
        }
    }
}

/// Builder for PhysicalConfig.
#[derive(Clone, Debug, Default)]
pub struct PhysicalConfigBuilder {
    config: PhysicalConfig,
}

impl PhysicalConfigBuilder {
    pub fn item_default_length(mut self, value: f64) -> Self {
        self.config.item_default_length = value;
        self
    }

    pub fn container_default_length(mut self, value: f64) -> Self {
        self.config.container_default_length = value;
        self
    }

    pub fn dimension_unit(mut self, unit: LengthUnit) -> Self {
        self.config.dimension_unit = unit;
        self
    }

    pub fn weight_unit(mut self, unit: WeightUnit) -> Self {
        self.config.weight_unit = unit;
        self
    }

    pub fn void_fill_density(mut self, density: Density) -> Self {
        self.config.void_fill_density = density;
        self
    }

    pub fn build(self) -> PhysicalConfig {
        self.config
    }
}

fn env_string(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        Err(env::VarError::NotPresent) => None,
        Err(err) => {
            warn!(var = name, error = %err, "Access to environment variable failed, using default value");
            None
        }
    }
}

/// Accepts a bare number (grams per milliliter) or `"<weight>/<volume unit>"`.
fn parse_density(raw: &str) -> Result<Density, PhysicalError> {
    match raw.trim().parse::<f64>() {
        Ok(grams) => Ok(Density::per_milliliter(Weight::try_new(grams, WeightUnit::Gram)?)),
        Err(_) => raw.parse::<Density>(),
    }
}

fn parse_with_warning<T, E>(
    var_name: &str,
    raw: &str,
    default: T,
    parse: impl Fn(&str) -> Result<T, E>,
    validator: impl Fn(&T) -> bool,
    invalid_hint: &str,
) -> T
where
    T: Copy + Display,
    E: Display,
{
    match parse(raw) {
        Ok(value) if validator(&value) => {
            info!(var = var_name, value = %value, "Using configured value");
            value
        }
        Ok(_) => {
            warn!(
                var = var_name,
                raw,
                hint = invalid_hint,
                fallback = %default,
                "Invalid configuration value, using default"
            );
            default
        }
        Err(err) => {
            warn!(
                var = var_name,
                raw,
                error = %err,
                fallback = %default,
                "Could not parse configuration value, using default"
            );
            default
        }
    }
}

fn load_with_warning<T, E>(
    var_name: &str,
    default: T,
    parse: impl Fn(&str) -> Result<T, E>,
    validator: impl Fn(&T) -> bool,
    invalid_hint: &str,
) -> T
where
    T: Copy + Display,
    E: Display,
{
    match env_string(var_name) {
        Some(raw) => parse_with_warning(var_name, &raw, default, parse, validator, invalid_hint),
        None => default,
    }
}
