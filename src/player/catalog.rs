use crate::player::error::CatalogError;

pub const DEFAULT_TRACKS: [&str; 5] = ["Track A", "Track B", "Track C", "Track D", "Track E"];

/// Fixed, ordered list of selectable track names. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackCatalog {
    tracks: Vec<String>,
}

impl TrackCatalog {
    pub fn new(tracks: Vec<String>) -> Result<Self, CatalogError> {
        let mut unique: Vec<String> = Vec::with_capacity(tracks.len());
        for (i, track) in tracks.into_iter().enumerate() {
            let track = track.trim();
            if track.is_empty() {
                return Err(CatalogError::BlankName(i));
            }
            if !unique.iter().any(|t| t == track) {
                unique.push(track.to_string());
            }
        }

        if unique.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { tracks: unique })
    }

    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tracks.get(index).map(String::as_str)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t == name)
    }

    pub fn default_track(&self) -> &str {
        &self.tracks[0]
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.tracks.len()
    }

    pub fn previous_index(&self, index: usize) -> usize {
        if index == 0 || index >= self.tracks.len() {
            self.tracks.len() - 1
        } else {
            index - 1
        }
    }
}

impl Default for TrackCatalog {
    fn default() -> Self {
        Self {
            tracks: DEFAULT_TRACKS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(TrackCatalog::new(vec![]), Err(CatalogError::Empty));
    }

    #[test]
    fn rejects_blank_names() {
        assert_eq!(
            TrackCatalog::new(names(&["Track A", "  "])),
            Err(CatalogError::BlankName(1))
        );
    }

    #[test]
    fn drops_duplicates_keeping_order() {
        let catalog = TrackCatalog::new(names(&["B", "A", "B", " A "])).unwrap();
        assert_eq!(catalog.tracks(), &["B".to_string(), "A".to_string()]);
        assert_eq!(catalog.default_track(), "B");
        assert_eq!(catalog.position("A"), Some(1));
        assert_eq!(catalog.position("C"), None);
    }

    #[test]
    fn selection_wraps() {
        let catalog = TrackCatalog::default();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.default_track(), "Track A");
        assert_eq!(catalog.next_index(4), 0);
        assert_eq!(catalog.next_index(1), 2);
        assert_eq!(catalog.previous_index(0), 4);
        assert_eq!(catalog.previous_index(3), 2);
        assert_eq!(catalog.get(5), None);
    }
}
