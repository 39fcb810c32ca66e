//! Model to entity mappers
//!
//! `From<Model>` conversions turn database rows into domain entities and read
//! projections. Raw `i32` keys are wrapped in their typed ids here and nowhere
//! else.

mod discussion;
mod reply;
mod thread;
