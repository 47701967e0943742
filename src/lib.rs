//! This crate contains code for a small untyped lambda-calculus core and a
//! demonstration of Church-encoded boolean logic built on top of it.

pub mod church;
pub mod demo;
pub mod evaluation;
pub mod expression;
pub mod substitution;
