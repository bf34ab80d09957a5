//! Runtime values and the capability surface seen by override resolution.
//!
//! ## Key Types
//!
//! - [`Dynamic`]: Runtime value for operands, keyword values and results
//! - [`Operand`]: Capability surface of operand objects
//! - [`Handler`]: Type-erased override callable
//! - [`OverrideCall`]: Borrowed call arguments handed to a handler
//! - [`OverrideMap`]: The canonical operation → handler mapping

mod dynamic;
mod handler;
mod operand;
mod override_call;
mod override_map;

pub use dynamic::Dynamic;
pub use handler::{Handler, OverrideCallable, Reply};
pub use operand::{Operand, TypeFlags, attr};
pub use override_call::{Kwargs, OverrideCall};
pub use override_map::OverrideMap;
