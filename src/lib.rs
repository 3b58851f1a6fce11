//! SpecsDesk Library
//!
//! Core library for the SpecsDesk desktop application: sidebar navigation and the
//! computer specs pipeline.

pub mod app;
pub mod navigation;
pub mod specs;
pub mod storage;
pub mod system;
pub mod ui;
