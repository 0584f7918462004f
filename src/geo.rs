//! Geographic point extraction for map placement.

use tracing::warn;

use crate::constants::fields::GEO_MARKER;
use crate::constants::geo::WKT_POINT_TAG;
use crate::record::Record;
use crate::types::RecordId;

/// One map point extracted from a record.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoPoint {
    /// Record the point belongs to.
    pub record_id: RecordId,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

/// Extracts map points from geocoded records.
pub struct GeoExtractor;

impl GeoExtractor {
    /// Extract at most one `(lat, lng)` point per record.
    ///
    /// The source encodes coordinates in `(lng, lat)` order; the output pair
    /// is normalized for map consumption. Records without a conforming
    /// well-known-text point are silently omitted.
    pub fn extract_points<'a, I>(records: I) -> Vec<GeoPoint>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut points = Vec::new();
        for record in records {
            let wkt = record.details.iter().find_map(|detail| {
                if detail.field_name.contains(GEO_MARKER) {
                    detail.value.wkt()
                } else {
                    None
                }
            });
            let Some(wkt) = wkt else {
                continue;
            };
            match parse_wkt_point(wkt) {
                Some((lng, lat)) => points.push(GeoPoint {
                    record_id: record.id.clone(),
                    lat,
                    lng,
                }),
                None => warn!(record_id = %record.id, wkt, "skipping malformed point"),
            }
        }
        points
    }
}

/// Parse a `POINT(<lng> <lat>)` well-known-text string.
///
/// Whitespace-tolerant around and between the signed decimal coordinates.
/// Returns the coordinates in source `(lng, lat)` order, or `None` when the
/// string does not conform.
pub fn parse_wkt_point(wkt: &str) -> Option<(f64, f64)> {
    let rest = wkt.trim().strip_prefix(WKT_POINT_TAG)?.trim();
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    let mut coords = inner.split_whitespace();
    let lng = coords.next()?.parse::<f64>().ok()?;
    let lat = coords.next()?.parse::<f64>().ok()?;
    if coords.next().is_some() {
        return None;
    }
    Some((lng, lat))
}
