//! Flutter bridge crate for Task Manager.

pub mod api;
