#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod exercise;
mod one_rep_max;
mod program;
mod repository;
mod template;

pub use error::*;
pub use exercise::*;
pub use one_rep_max::*;
pub use program::*;
pub use repository::*;
pub use template::*;
