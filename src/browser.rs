use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::ExportError;

const CANDIDATES: &[&str] = &[
    "google-chrome",
    "chromium-browser",
    "chromium",
    "chrome",
    "msedge",
];

/// Return a Chrome/Chromium executable path.
///
/// When `explicit` is provided it is validated directly. Otherwise common
/// binary names are searched on `PATH` and the first hit wins.
pub fn find_browser(explicit: Option<&Path>) -> Result<PathBuf, ExportError> {
    if let Some(path) = explicit {
        return if path.is_file() {
            Ok(path.to_path_buf())
        } else {
            Err(ExportError::BrowserNotFound(path.to_path_buf()))
        };
    }

    let search_path = env::var_os("PATH").unwrap_or_default();
    CANDIDATES
        .iter()
        .find_map(|name| which_in(name, &search_path))
        .ok_or(ExportError::NoBrowserFound)
}

fn which_in(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn explicit_path_is_returned_unchanged() {
        let tempdir = tempfile::tempdir().unwrap();
        let binary = tempdir.path().join("my-chrome");
        File::create(&binary).unwrap();

        let found = find_browser(Some(&binary)).unwrap();
        assert_eq!(found, binary);
    }

    #[test]
    fn missing_explicit_path_fails_with_that_path() {
        let path = Path::new("/does/not/exist/chrome");
        match find_browser(Some(path)).unwrap_err() {
            ExportError::BrowserNotFound(p) => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn explicit_path_to_a_directory_fails() {
        let tempdir = tempfile::tempdir().unwrap();
        match find_browser(Some(tempdir.path())).unwrap_err() {
            ExportError::BrowserNotFound(p) => assert_eq!(p, tempdir.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn search_finds_a_candidate_on_the_search_path() {
        let empty = tempfile::tempdir().unwrap();
        let bin = tempfile::tempdir().unwrap();
        File::create(bin.path().join("chromium")).unwrap();

        let search_path = env::join_paths([empty.path(), bin.path()]).unwrap();
        let found = which_in("chromium", &search_path).unwrap();
        assert_eq!(found, bin.path().join("chromium"));
    }

    #[test]
    fn empty_search_path_resolves_nothing() {
        assert!(which_in("google-chrome", OsStr::new("")).is_none());
    }

    #[test]
    fn exhausted_search_error_points_at_the_browser_flag() {
        assert!(ExportError::NoBrowserFound.to_string().contains("--browser"));
    }
}
