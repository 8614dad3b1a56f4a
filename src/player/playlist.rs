use crate::utils::errors::PlayerError;

/// Ordered, fixed set of media sources with a wrapping cursor. Navigation
/// never fails and never leaves the valid index range.
#[derive(Debug, Clone)]
pub struct Playlist {
    sources: Vec<String>,
    index: usize,
}

impl Playlist {
    pub fn new(sources: Vec<String>) -> Result<Self, PlayerError> {
        if sources.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        Ok(Self { sources, index: 0 })
    }

    /// The active source.
    pub fn current(&self) -> &str {
        &self.sources[self.index]
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Move to the next source, wrapping at the end. Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.sources.len();
        self.index
    }

    /// Move to the previous source, wrapping at the start. Returns the new
    /// index.
    pub fn retreat(&mut self) -> usize {
        self.index = (self.index + self.sources.len() - 1) % self.sources.len();
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(n: usize) -> Playlist {
        Playlist::new((0..n).map(|i| format!("source-{i}")).collect()).unwrap()
    }

    #[test]
    fn test_rejects_empty_source_list() {
        assert!(matches!(
            Playlist::new(Vec::new()),
            Err(PlayerError::EmptyPlaylist)
        ));
    }

    #[test]
    fn test_len_and_is_empty() {
        let playlist = playlist(3);
        assert_eq!(playlist.len(), 3);
        assert!(!playlist.is_empty());
    }

    #[test]
    fn test_advance_wraps_at_end() {
        let mut playlist = playlist(3);
        assert_eq!(playlist.advance(), 1);
        assert_eq!(playlist.advance(), 2);
        assert_eq!(playlist.advance(), 0);
        assert_eq!(playlist.current(), "source-0");
    }

    #[test]
    fn test_retreat_wraps_at_start() {
        let mut playlist = playlist(3);
        assert_eq!(playlist.retreat(), 2);
        assert_eq!(playlist.current(), "source-2");
    }

    #[test]
    fn test_full_cycle_returns_to_origin() {
        let mut playlist = playlist(5);
        for _ in 0..playlist.len() {
            playlist.advance();
        }
        assert_eq!(playlist.current_index(), 0);
        for _ in 0..playlist.len() {
            playlist.retreat();
        }
        assert_eq!(playlist.current_index(), 0);
    }

    #[test]
    fn test_single_source_wraps_to_itself() {
        let mut playlist = playlist(1);
        assert_eq!(playlist.advance(), 0);
        assert_eq!(playlist.retreat(), 0);
    }
}
