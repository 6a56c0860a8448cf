#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod definition;
mod error;
mod extras;
mod module;
mod options;
mod schema;
mod sought_type;
mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use definition::Definition;
pub use error::DefinitionError;
pub use extras::Extras;
pub use module::{Representer, RepresenterModule};
pub use options::Options;
pub use sought_type::SoughtType;
pub use value::Value;
