/// What a single poll tick of the file watcher ended up doing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FileWatchEvent {
    /// Neither file changed since the last successful load.
    NoChange,
    /// A new certificate bundle was loaded and swapped in.
    Reloaded,
    /// One of the files could not be stat'ed.
    StatFailed,
    /// The files changed but did not form a loadable pair.
    LoadFailed,
}
