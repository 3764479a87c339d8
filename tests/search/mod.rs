//! Search Command Tests Module

pub mod commands;
pub mod dispatch;
pub mod global;
