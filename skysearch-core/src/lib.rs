//! Core library for the `skysearch` weather widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The root controller state machine (weather result + banner message)
//! - Abstraction over the weather provider (OpenWeatherMap client)
//! - The search-input and result-display sub-view logic
//!
//! It is used by `skysearch-cli`, but can also be reused by other front ends.

pub mod app;
pub mod config;
pub mod display;
pub mod model;
pub mod provider;
pub mod search;

pub use app::WeatherApp;
pub use config::Config;
pub use model::{BannerMessage, CurrentConditions, MessageKind, WeatherGroup, WeatherResult};
pub use provider::{ProviderError, WeatherProvider};
pub use search::{SearchEvent, SearchInput};
