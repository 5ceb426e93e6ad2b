//! `todolist` — a single-screen terminal to-do list.

pub mod app;
pub mod config;
pub mod controls;
pub mod notice;
pub mod ui;
