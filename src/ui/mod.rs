//! UI layer
//!
//! Views, reusable components and widgets, symbols, and theme definitions.

pub mod components;
pub mod navigation;
pub mod symbols;
pub mod theme;
pub mod views;
pub mod widgets;
