//! Synthetic document generation for OCR extraction tests.
//!
//! The pipeline renders documents from the built-in [`catalog`], degrades
//! them per [`quality`] tier, writes PNGs through [`storage`] and records
//! ground truth in manifests ([`services::manifest`]). The
//! [`services::linker`] then bundles generated documents into donation
//! scenarios.

#![allow(clippy::should_implement_trait)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod models;
pub mod quality;
pub mod render;
pub mod sampling;
pub mod services;
pub mod storage;
pub mod utils;
