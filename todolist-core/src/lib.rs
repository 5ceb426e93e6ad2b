//! Core state for the `todolist` application.
//!
//! Holds the task model and its transitions, the display projection the
//! terminal layer paints, and the codec used to carry state across a
//! configuration change.

pub mod codec;
pub mod task;
pub mod view;
