//! Dependency injection bootstrap based on [springtime_di].
//!
//! On start, a component container is created from all components registered at compile time. A
//! single [Dao](dao::Dao) is then resolved from it, either by name or by type, and queried once.
//! The way of resolving is taken from [ApplicationConfig](config::ApplicationConfig), which can be
//! overridden with a `luban.json` file or `LUBAN_` environment variables.

pub mod application;
pub mod config;
pub mod dao;
pub mod logging;
