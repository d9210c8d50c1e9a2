//! Adapter utilities for the `floating-size` crate.
//!
//! `floating-size` only talks to an abstract [`floating_size::ElementTree`]. This crate provides
//! the pieces an integration usually needs around it:
//!
//! - [`MemoryDom`], an in-memory element tree (handy for tests and headless hosts)
//! - [`PopupMenu`], a controller wiring the bounded-size modifiers for a dropdown menu
//!
//! It stays framework-agnostic and holds no UI objects.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod dom;
mod popup_menu;

#[cfg(test)]
mod tests;

pub use dom::{MemoryDom, NodeId};
pub use popup_menu::{PopupMenu, PopupMenuOptions};
