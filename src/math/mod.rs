//! Numerical workloads.

pub mod dot_product;
