//! Decoder for the encoded polyline format.
//!
//! Routing services return route geometries as encoded polylines: a compact
//! ASCII encoding of coordinate deltas. Decoding happens once at the API
//! boundary; everything downstream works with plain coordinate sequences.

use geodraw_types::geo::GeoPoint2d;

use crate::error::GeodrawError;

/// Precision factor exponent used by most routing services.
pub const DEFAULT_PRECISION: u32 = 5;

/// Decodes an encoded polyline into geographic points using the default
/// precision of 5 decimal digits.
pub fn decode(encoded: &str) -> Result<Vec<GeoPoint2d>, GeodrawError> {
    decode_with_precision(encoded, DEFAULT_PRECISION)
}

/// Decodes an encoded polyline into geographic points.
///
/// `precision` is the number of decimal digits the coordinates were scaled
/// by when encoding. Malformed input (characters outside the encoding
/// alphabet, a truncated or overlong value, or an odd number of values) is a
/// [`GeodrawError::Decoding`] error.
pub fn decode_with_precision(
    encoded: &str,
    precision: u32,
) -> Result<Vec<GeoPoint2d>, GeodrawError> {
    let line = polyline::decode_polyline(encoded, precision)
        .map_err(|err| GeodrawError::Decoding(err.to_string()))?;
    Ok(line
        .into_iter()
        .map(|coord| GeoPoint2d::latlon(coord.y, coord.x))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn decodes_the_reference_polyline() {
        let points =
            decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").expect("reference polyline is well-formed");

        let expected = [(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)];
        assert_eq!(points.len(), expected.len());
        for (point, (lat, lon)) in points.iter().zip(expected) {
            assert_abs_diff_eq!(point.lat(), lat, epsilon = 1e-9);
            assert_abs_diff_eq!(point.lon(), lon, epsilon = 1e-9);
        }
    }

    #[test]
    fn empty_input_is_an_empty_route() {
        assert!(decode("").expect("empty polyline is valid").is_empty());
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_matches!(decode("_p~iF~ps|U\n"), Err(GeodrawError::Decoding(_)));
    }

    #[test]
    fn rejects_truncated_values() {
        // A continuation bit set on the last byte means more bytes must follow.
        assert_matches!(decode("_p~iF~"), Err(GeodrawError::Decoding(_)));
    }

    #[test]
    fn rejects_odd_value_count() {
        // A single complete value cannot form a coordinate pair.
        assert_matches!(decode("_p~iF"), Err(GeodrawError::Decoding(_)));
    }

    #[test]
    fn rejects_overlong_values() {
        // Thirteen 5-bit chunks overflow the value range and must not decode
        // into garbage coordinates.
        assert_matches!(decode("____________G?"), Err(GeodrawError::Decoding(_)));
    }

    #[test]
    fn honors_the_precision_factor() {
        let low = decode_with_precision("_p~iF~ps|U", 5).expect("well-formed");
        let high = decode_with_precision("_p~iF~ps|U", 6).expect("well-formed");
        assert_abs_diff_eq!(low[0].lat(), high[0].lat() * 10.0, epsilon = 1e-9);
    }
}
