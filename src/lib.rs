//! evochain: follow a species' evolution chain and render its stages
//!
//! Layers:
//! - `domain`: evolution tree, breadth-first stage flattening, name normalization
//! - `application`: lookup service (species → chain → stages → cards)
//! - `infrastructure`: provider trait, PokeAPI client, DI container
//! - `cli`: arguments, dispatch and renderers

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
