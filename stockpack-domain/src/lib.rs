//! Domain logic: the fulfillment package.
//!
//! A [`Package`] groups inventory units that will ship together from one stock location. The
//! allocation process that owns it adds and removes units while splitting an order, then turns
//! the winning package into a [`Shipment`](stockpack_types::Shipment) with
//! [`Package::into_shipment`].
//!
//! This crate owns *what* a package contains and what can be derived from it. Choosing stock
//! locations, pricing rates and persisting shipments belong to the host.

mod config;
mod content;
mod error;
mod package;

pub use config::{
    CONFIG_FILE_NAME, PackageConfig, StockpackConfig, discover_config, load_config,
    load_or_default, parse_config,
};
pub use content::ContentItem;
pub use error::{PackageError, PackageResult};
pub use package::Package;
