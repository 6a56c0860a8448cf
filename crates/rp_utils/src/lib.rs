#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod default;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use default::default;
