//! Route module: declarative route descriptors and the tables holding them
//!
//! Descriptors are plain data; nothing here generates paths.

pub mod descriptor;
pub mod table;

pub use descriptor::{RouteDescriptor, RouteSignature, SearchKey};
pub use table::RouteTable;
