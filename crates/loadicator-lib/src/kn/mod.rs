//! KN cross-curves of stability.
//!
//! - [`curve`] - a single heel angle's KN-versus-displacement curve
//! - [`surface`] - the set of curves answering `(displacement, heel) -> KN`
//! - [`reader`] - loading cross-curves from a paired-column CSV

pub mod curve;
pub mod reader;
pub mod surface;

pub use curve::KnCurve;
pub use surface::KnSurface;
