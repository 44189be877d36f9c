#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod analysis;
mod big5;
mod catalog;
mod exercise;
mod guidelines;
mod muscle;
mod one_rep_max;
mod profile;
mod program;
mod statistics;
mod training;
mod volume;
mod week;

#[cfg(test)]
mod fixtures;

pub use analysis::*;
pub use big5::*;
pub use catalog::*;
pub use exercise::*;
pub use guidelines::*;
pub use muscle::*;
pub use one_rep_max::*;
pub use profile::*;
pub use program::*;
pub use statistics::*;
pub use training::*;
pub use volume::*;
pub use week::*;
