//! Salomão - AI Sales System Builder
//!
//! This crate implements the Salomão scripted wizard: a five-step
//! questionnaire that interviews a business owner and turns the answers
//! into a published AI sales system with lead capture and dashboard
//! metrics.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
