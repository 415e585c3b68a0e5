//! Pairweight - Pairwise Comparison Survey Service
//!
//! This crate collects pairwise importance comparisons between a fixed set of
//! criteria and computes prioritization weights using the Analytic Hierarchy
//! Process (AHP) and its fuzzy extension (FAHP).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
