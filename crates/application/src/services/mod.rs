//! Application services

mod stop_finder_service;

pub use stop_finder_service::{NO_STOP_FOUND, StopFinderService, StopResult, StopSearchResult};
