pub mod cached_geocoder;
pub mod kakao_geocoder;

pub use cached_geocoder::CachedGeocoder;
pub use kakao_geocoder::KakaoGeocoder;
