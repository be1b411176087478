//! Shared utility modules used across Toolshed components.

pub mod fold;
