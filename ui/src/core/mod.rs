//! Platform-agnostic building blocks: preferences, navigation contract,
//! persistence and timers.

pub mod preferences;
pub mod routes;
pub mod storage;
pub mod timing;
