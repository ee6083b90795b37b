//! Physical model of shippable things: items, the containers they are packed
//! into, and the packages that combine both.
//!
//! Dimensions are normalized to centimeters and weights to grams when a
//! value is built. Packages derive their weight, remaining volume and
//! void-fill weight from their current contents on every call.
//!
//! # Examples
//! ```
//! use std::sync::Arc;
//!
//! use physical::{Container, HoldsItems, Item, Package, Weighted};
//! use physical::units::{Weight, WeightUnit};
//!
//! let container = Container::builder()
//!     .dimensions([30.0, 20.0, 10.0])
//!     .weight(0.8)
//!     .weight_unit(WeightUnit::Pound)
//!     .build()
//!     .unwrap();
//! let item = Item::builder()
//!     .dimensions([10.0, 10.0, 5.0])
//!     .weight(1.2)
//!     .weight_unit(WeightUnit::Pound)
//!     .build()
//!     .unwrap();
//!
//! let mut package = Package::builder().container(container).build();
//! package.add_item(Arc::new(item));
//! assert!(package.weight().approx_eq(&Weight::new(2.0, WeightUnit::Pound), 1e-6));
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod package;
pub mod types;
pub mod units;

pub use config::PhysicalConfig;
pub use error::PhysicalError;
pub use model::{Container, Cuboid, Item};
pub use package::{IdGenerator, Package, UuidGenerator};
pub use types::{Dimensional, HoldsItems, InnerGeometry, Weighted};
