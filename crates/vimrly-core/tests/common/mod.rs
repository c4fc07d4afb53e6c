//! Shared test doubles

#![allow(dead_code)]

pub mod driver;
pub mod surface;
