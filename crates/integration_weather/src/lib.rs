//! OpenWeatherMap weather integration for Stopcast
//!
//! Client for the [OpenWeatherMap](https://openweathermap.org/current)
//! current-weather API. Requests imperial units, so temperatures arrive
//! in Fahrenheit.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, OpenWeatherConfig, WeatherClient, WeatherError};
pub use models::CurrentConditions;
