//! Cursor navigation over the breed sequence and render-state selection.

use crate::breeds::BreedRecord;

/// Index into the breed sequence, clamped to `[0, len - 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Step forward; no-op on the last record. No wraparound.
    pub fn advance(&mut self, len: usize) {
        if self.index + 1 < len {
            self.index += 1;
        }
    }

    /// Step back; no-op on the first record.
    pub fn retreat(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    /// Jump back to the first record.
    pub fn rewind(&mut self) {
        self.index = 0;
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self, len: usize) -> bool {
        len == 0 || self.index + 1 >= len
    }
}

/// Where the one-and-only fetch currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// No request pending, nothing failed.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Request failed; holds the user-facing message.
    Failed(String),
}

/// What the browser screen renders. Selection priority is loading, then
/// error, then the record under the cursor, then the empty notice.
#[derive(Debug, PartialEq)]
pub enum BreedView<'a> {
    Loading,
    Error(&'a str),
    Breed(&'a BreedRecord),
    Empty,
}

pub fn select_view<'a>(
    status: &'a FetchStatus,
    breeds: &'a [BreedRecord],
    cursor: Cursor,
) -> BreedView<'a> {
    match status {
        FetchStatus::Loading => BreedView::Loading,
        FetchStatus::Failed(msg) => BreedView::Error(msg),
        FetchStatus::Idle => match breeds.get(cursor.index()) {
            Some(record) => BreedView::Breed(record),
            None => BreedView::Empty,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, name: &str) -> BreedRecord {
        BreedRecord {
            id,
            name: name.to_string(),
            breed_group: "Toy".to_string(),
            bred_for: "Lapdog".to_string(),
            life_span_min: "10".to_string(),
            life_span_max: "12".to_string(),
            height_min: "23".to_string(),
            height_max: "29".to_string(),
            temperament: "Curious".to_string(),
            image_url: format!("https://img/{}.jpg", id),
            weight: "3 - 6".to_string(),
            origin: "Germany".to_string(),
        }
    }

    #[test]
    fn test_cursor_advance_stops_at_last() {
        let mut cursor = Cursor::default();
        cursor.advance(2);
        assert_eq!(cursor.index(), 1);
        cursor.advance(2);
        assert_eq!(cursor.index(), 1);
        assert!(cursor.at_end(2));
    }

    #[test]
    fn test_cursor_retreat_stops_at_first() {
        let mut cursor = Cursor::default();
        cursor.retreat();
        assert_eq!(cursor.index(), 0);
        assert!(cursor.at_start());

        cursor.advance(3);
        cursor.retreat();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_cursor_rewind() {
        let mut cursor = Cursor::default();
        cursor.advance(5);
        cursor.advance(5);
        assert_eq!(cursor.index(), 2);
        cursor.rewind();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_cursor_empty_sequence() {
        let mut cursor = Cursor::default();
        cursor.advance(0);
        assert_eq!(cursor.index(), 0);
        assert!(cursor.at_start());
        assert!(cursor.at_end(0));
    }

    #[test]
    fn test_view_loading_wins() {
        let breeds = vec![record(1, "Akita")];
        let view = select_view(&FetchStatus::Loading, &breeds, Cursor::default());
        assert_eq!(view, BreedView::Loading);
    }

    #[test]
    fn test_view_error_beats_data() {
        let status = FetchStatus::Failed("nope".to_string());
        let breeds = vec![record(1, "Akita")];
        let view = select_view(&status, &breeds, Cursor::default());
        assert_eq!(view, BreedView::Error("nope"));
    }

    #[test]
    fn test_view_failed_fetch_leaves_sequence_empty() {
        let status = FetchStatus::Failed("nope".to_string());
        let breeds: Vec<BreedRecord> = Vec::new();
        assert_eq!(
            select_view(&status, &breeds, Cursor::default()),
            BreedView::Error("nope")
        );
        assert!(breeds.is_empty());
    }

    #[test]
    fn test_view_shows_record_under_cursor() {
        let breeds = vec![record(1, "Akita"), record(2, "Boxer")];
        let mut cursor = Cursor::default();
        cursor.advance(breeds.len());

        match select_view(&FetchStatus::Idle, &breeds, cursor) {
            BreedView::Breed(r) => assert_eq!(r.name, "Boxer"),
            other => panic!("expected breed view, got {:?}", other),
        }
    }

    #[test]
    fn test_view_empty_sequence() {
        let view = select_view(&FetchStatus::Idle, &[], Cursor::default());
        assert_eq!(view, BreedView::Empty);
    }
}
