use std::hash::{Hash, Hasher};

/// An artist record as read from the dataset.
///
/// Identity is the name alone: two artists with the same name compare equal
/// and hash the same regardless of their song lists.
#[derive(Debug, Clone, Default)]
pub struct Artist {
    name: String,
    songs: Vec<String>,
}

impl Artist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            songs: Vec::new(),
        }
    }

    pub fn with_songs<I, S>(name: impl Into<String>, songs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            songs: songs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn songs(&self) -> &[String] {
        &self.songs
    }

    pub fn add_song(&mut self, song: impl Into<String>) {
        self.songs.push(song.into());
    }

    /// First song in this artist's list that `other` also lists. Blank titles never match.
    pub fn collaboration_with(&self, other: &Artist) -> Option<&str> {
        self.songs
            .iter()
            .find(|song| !song.is_empty() && other.songs.contains(song))
            .map(String::as_str)
    }
}

impl PartialEq for Artist {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Artist {}

impl Hash for Artist {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl From<&str> for Artist {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
