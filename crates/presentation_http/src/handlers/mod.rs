//! HTTP request handlers

pub mod directions;
pub mod fallback;
pub mod geocode;
pub mod health;
pub mod search;
pub mod tiles;
pub mod transit;

/// Public API surface, listed by the health check and the API 404
pub const API_ENDPOINTS: &[&str] = &[
    "GET /api/health",
    "GET /api/transit/points?type=gbaka|woroworo",
    "GET /api/search/places?q=...&limit=&country=",
    "GET /api/geocode?q=...&limit=&country=",
    "GET /api/directions?from=lon,lat&to=lon,lat&profile=driving|walking|cycling",
    "GET /api/tiles/{mapbox|osm}/{z}/{x}/{y}",
];

/// Parse an optional numeric query parameter, ignoring junk
pub(crate) fn parse_limit(raw: Option<&str>) -> Option<u8> {
    raw.and_then(|l| l.trim().parse::<u32>().ok())
        .map(|l| u8::try_from(l).unwrap_or(u8::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_parsing() {
        assert_eq!(parse_limit(None), None);
        assert_eq!(parse_limit(Some("3")), Some(3));
        assert_eq!(parse_limit(Some(" 7 ")), Some(7));
        assert_eq!(parse_limit(Some("1000")), Some(u8::MAX));
        assert_eq!(parse_limit(Some("many")), None);
        assert_eq!(parse_limit(Some("-1")), None);
    }
}
