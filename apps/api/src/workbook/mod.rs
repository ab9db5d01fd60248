//! Workbook domain — field model, section contract, document renderer, and
//! the route handler that ties them to the delivery adapter.

pub mod fields;
pub mod handlers;
pub mod renderer;
pub mod sections;
