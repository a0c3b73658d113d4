pub mod api;
pub mod cache;
pub mod geocoding;
pub mod map;
pub mod navigation;
pub mod storage;
