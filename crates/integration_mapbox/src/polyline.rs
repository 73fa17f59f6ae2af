//! Encoded polyline decoding
//!
//! Google polyline algorithm: zig-zag varints in 5-bit chunks offset by 63,
//! pairs of latitude/longitude deltas.

use crate::error::MapboxError;

/// Decode an encoded polyline into `[longitude, latitude]` pairs
pub fn decode_polyline(encoded: &str, precision: u32) -> Result<Vec<[f64; 2]>, MapboxError> {
    let factor = f64::from(10_u32.pow(precision));
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;
    let mut points = Vec::new();

    while index < bytes.len() {
        lat = accumulate(lat, next_delta(bytes, &mut index)?)?;
        lon = accumulate(lon, next_delta(bytes, &mut index)?)?;
        #[allow(clippy::cast_precision_loss)]
        points.push([lon as f64 / factor, lat as f64 / factor]);
    }

    Ok(points)
}

fn accumulate(value: i64, delta: i64) -> Result<i64, MapboxError> {
    value
        .checked_add(delta)
        .ok_or_else(|| MapboxError::ParseError("polyline value overflow".to_string()))
}

fn next_delta(bytes: &[u8], index: &mut usize) -> Result<i64, MapboxError> {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let byte = *bytes
            .get(*index)
            .ok_or_else(|| MapboxError::ParseError("truncated polyline".to_string()))?;
        *index += 1;

        let chunk = i64::from(byte)
            .checked_sub(63)
            .filter(|c| (0..64).contains(c))
            .ok_or_else(|| MapboxError::ParseError(format!("invalid polyline byte {byte}")))?;
        if shift > 60 {
            return Err(MapboxError::ParseError("polyline value overflow".to_string()));
        }

        result |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 == 1 { !(result >> 1) } else { result >> 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_example() {
        let points = decode_polyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@", 5).unwrap();
        let expected = [[-120.2, 38.5], [-120.95, 40.7], [-126.453, 43.252]];
        assert_eq!(points.len(), expected.len());
        for (got, want) in points.iter().zip(expected) {
            assert!((got[0] - want[0]).abs() < 1e-9);
            assert!((got[1] - want[1]).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_is_empty() {
        assert!(decode_polyline("", 5).unwrap().is_empty());
    }

    #[test]
    fn truncated_input_rejected() {
        // Latitude only, longitude missing
        assert!(decode_polyline("_p~iF", 5).is_err());
    }

    #[test]
    fn invalid_byte_rejected() {
        assert!(decode_polyline(" ", 5).is_err());
    }

    #[test]
    fn accumulated_overflow_rejected() {
        // Each pair is a near-maximal delta; six of them overflow i64
        let encoded = format!("}}{}F", "~".repeat(11)).repeat(6);
        let err = decode_polyline(&encoded, 5).unwrap_err();
        assert!(matches!(err, MapboxError::ParseError(ref m) if m.contains("overflow")));
    }

    #[test]
    fn precision_six() {
        let points = decode_polyline("_izlhA~rlgdF", 6).unwrap();
        assert!((points[0][1] - 38.5).abs() < 1e-9);
        assert!((points[0][0] - -120.2).abs() < 1e-9);
    }
}
