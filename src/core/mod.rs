// src/core/mod.rs

pub mod dom;
pub mod net;

pub use dom::Dom;
