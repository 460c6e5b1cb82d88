//! Flat breed records and the raw-to-record transform.
//!
//! The API's nested, everything-optional shape is flattened into plain
//! display strings. Entries without an image are dropped; every other
//! missing field falls back to "Unknown".

use crate::api::RawBreed;

/// Sentinel for any field the API left out.
pub const UNKNOWN: &str = "Unknown";

/// One browsable breed, all fields ready-formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct BreedRecord {
    pub id: u32,
    pub name: String,
    pub breed_group: String,
    pub bred_for: String,
    pub life_span_min: String,
    pub life_span_max: String,
    pub height_min: String,
    pub height_max: String,
    /// Comma-separated trait list, e.g. "Stubborn, Curious, Playful".
    pub temperament: String,
    pub image_url: String,
    /// Metric weight range copied verbatim, e.g. "3 - 6".
    pub weight: String,
    pub origin: String,
}

impl BreedRecord {
    /// Flatten one raw entry. Returns `None` when the entry carries no
    /// image URL, which excludes it from the browsable sequence.
    pub fn from_raw(raw: RawBreed) -> Option<Self> {
        let image_url = raw.image.and_then(|i| i.url).filter(|u| !u.is_empty())?;
        let (life_span_min, life_span_max) = life_span_bounds(raw.life_span.as_deref());
        let height_metric = raw.height.and_then(|h| h.metric);
        let (height_min, height_max) = range_bounds(height_metric.as_deref());

        Some(Self {
            id: raw.id,
            name: raw.name,
            breed_group: or_unknown(raw.breed_group),
            bred_for: or_unknown(raw.bred_for),
            life_span_min,
            life_span_max,
            height_min,
            height_max,
            temperament: or_unknown(raw.temperament),
            image_url,
            weight: or_unknown(raw.weight.and_then(|w| w.metric)),
            origin: or_unknown(raw.origin),
        })
    }

    /// Individual temperament entries, for chip rendering.
    pub fn temperament_tags(&self) -> Vec<&str> {
        self.temperament.split(", ").collect()
    }
}

/// Build the browsable sequence: drop image-less entries, keep API order.
pub fn build_records(raw: Vec<RawBreed>) -> Vec<BreedRecord> {
    raw.into_iter().filter_map(BreedRecord::from_raw).collect()
}

fn or_unknown(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Split a `"min - max"` range. Absent value means both bounds are
/// "Unknown"; a single value mirrors into max.
fn range_bounds(value: Option<&str>) -> (String, String) {
    let Some(value) = value else {
        return (UNKNOWN.to_string(), UNKNOWN.to_string());
    };
    let mut parts = value.split(" - ");
    let min = parts
        .next()
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string());
    let max = parts
        .next()
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| min.clone());
    (min, max)
}

/// Same split rule as [`range_bounds`], but each part is reduced to its
/// digits first ("10 - 12 years" becomes ("10", "12")). A part that
/// strips to nothing falls back like a missing one.
fn life_span_bounds(value: Option<&str>) -> (String, String) {
    let Some(value) = value else {
        return (UNKNOWN.to_string(), UNKNOWN.to_string());
    };
    let mut parts = value.split(" - ").map(strip_non_digits);
    let min = parts
        .next()
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());
    let max = parts
        .next()
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| min.clone());
    (min, max)
}

fn strip_non_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}
