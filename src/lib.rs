//! DailyWhy Engine - Heuristic decision analysis for the DailyWhy journal.
//!
//! This crate implements the scoring pipeline that ranks a decision's options
//! (score, normalize, narrate) and the weekly metrics analyzer that turns a
//! user's decision history into fatigue scores, bias fractions, and insights.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
