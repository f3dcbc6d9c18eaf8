//! Path utilities for the Zellij sandbox environment.
//!
//! In the Zellij plugin sandbox the host filesystem is mounted under
//! `/host`, pointing at the cwd of the last focused terminal (or the folder
//! Zellij was started from). When Zellij is started from a home directory
//! terminal this makes the data directory resolve to
//! `~/.local/share/zellij/bookstand`.

use std::path::PathBuf;

/// Returns the data directory used for the plugin's log output.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("bookstand")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_the_sandbox_mount() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/bookstand")
        );
    }
}
