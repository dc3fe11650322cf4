//! osm-wrangle library
//!
//! This crate provides the core functionality for the `osm-wrangle` binary.
//!
//! ## Overview
//!
//! - [`parser`] - Streams OSM XML, shapes `node`/`way` elements into flat documents,
//!   normalizes street suffixes and writes newline-delimited JSON
//! - [`store`] - Document store interface, in-memory store and `$match` pipelines
//! - [`cli`] - Command-line interface for the ingest and query flows
//! - [`config`] - TOML configuration
//! - [`models`] - Raw elements, shaped documents and the street abbreviation table
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use osm_wrangle::config::ResolvedConfig;
//! use osm_wrangle::{parser, store, errors::AppResult};
//! use std::path::Path;
//!
//! # fn example() -> AppResult<()> {
//! let config = ResolvedConfig::default();
//!
//! // Writes aurora_il.osm.json
//! let documents = parser::process_map(Path::new("aurora_il.osm"), false, &config.street_mapping)?;
//!
//! // Every document carrying an NHD:way_id tag
//! let matches = store::run_query(&config, "aurora_il.osm.json")?;
//! assert!(matches.len() <= documents.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod parser;
pub mod store;
pub mod ui;
pub mod utils;
