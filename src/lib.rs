pub mod catalog;
pub mod color_utils;
pub mod constants;
pub mod container;
pub mod hazard;
pub mod mixture;
pub mod reaction;
pub mod report;
pub mod session;
pub mod substance;
