// Domain layer: the package model and the classification rules. No I/O.

pub mod model;
pub mod sorter;
