use std::fmt;

/// The three views a session can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Most recent generation plus filters and the generate trigger
    #[default]
    LiveStream,
    /// Full history browsing
    Archive,
    /// Read-only dossier decoded from a share link
    Shared,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::LiveStream => "live stream",
            View::Archive => "archive",
            View::Shared => "shared",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
