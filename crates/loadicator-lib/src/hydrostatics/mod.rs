//! Hydrostatic particulars tabulated against draft.
//!
//! - [`property`] - the quantities a hydrostatic table can carry
//! - [`reader`] - loading a table from the hydrostatic particulars CSV
//! - [`table`] - the immutable, column-wise [`HydrostaticTable`] and its lookups
//!
//! # Example
//!
//! ```
//! use loadicator_lib::hydrostatics::{HydrostaticProperty, HydrostaticRow, HydrostaticTable};
//!
//! let table = HydrostaticTable::from_rows(vec![
//!     HydrostaticRow::new(9.0, 44_600.0, 4.52, 4.50),
//!     HydrostaticRow::new(10.0, 50_000.0, 5.00, 4.00),
//! ])
//! .unwrap();
//!
//! let displacement = table
//!     .interpolate(9.5, HydrostaticProperty::Displacement)
//!     .unwrap();
//! assert!((displacement - 47_300.0).abs() < 1e-9);
//! ```

pub mod property;
pub mod reader;
pub mod table;

pub use property::HydrostaticProperty;
pub use table::{HydrostaticProperties, HydrostaticRow, HydrostaticTable};
