//! Cyber Risk Assessment - Branching Questionnaire Scoring Engine
//!
//! This crate turns a respondent's answers to an adaptive cyber-security
//! questionnaire into a risk score, compliance gaps, tailored service
//! recommendations and an ROI model, and serves the flow over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
