//! `resources` module resolves the on-disk directory that holds game assets.
//!
//! The base directory is derived lexically from the location of the running
//! executable: the last `bin` component of the install layout is replaced by
//! `resources`. The base is computed once per process and cached; resolution never
//! touches the filesystem beyond locating the executable, so a returned path is not
//! guaranteed to exist.
//!

use std::{
    env::current_exe,
    io::{Error, ErrorKind},
    path::{Component, Path, PathBuf},
    sync::OnceLock,
};

/// Name of the directory that holds game assets.
///
const RESOURCE_DIR: &str = "resources";
/// Name of the install-layout directory that holds the executable.
///
const BINARY_DIR: &str = "bin";

/// [`BASE_PATH`] global static variable caches the resolved base resource directory.
///
/// Only successful resolutions are cached; a failed executable lookup leaves it
/// empty so the next call retries.
///
static BASE_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Derives the base resource directory from the directory of the executable.
///
/// The last `bin` component and everything after it are replaced by `resources`;
/// if there is no `bin` component, `resources` is appended as-is.
///
fn resource_root(exe_dir: &Path) -> PathBuf {
    let components: Vec<Component<'_>> = exe_dir.components().collect();
    let mut root = PathBuf::new();
    match components
        .iter()
        .rposition(|component| component.as_os_str() == BINARY_DIR)
    {
        Some(index) => {
            for component in &components[..index] {
                root.push(component.as_os_str());
            }
        }
        None => root = exe_dir.to_path_buf(),
    }
    root.push(RESOURCE_DIR);
    root
}

/// Resolves the directory that holds game assets, optionally descending into `sub_dir`.
///
/// Passing an empty `sub_dir` returns the base resource directory itself. The first
/// successful call computes the base from [`std::env::current_exe`] and caches it for
/// the rest of the process; failure to locate the executable is logged and returned
/// without caching, so a later call retries.
///
/// # Example
/// ```rust
/// # use desino::resources::resource_path;
/// let fonts = resource_path("fonts").expect("Executable location should be known");
/// assert_eq!(fonts, resource_path("").expect("Executable location should be known").join("fonts"));
/// ```
///
pub fn resource_path(sub_dir: &str) -> Result<PathBuf, Error> {
    let base = match BASE_PATH.get() {
        Some(base) => base,
        None => {
            let exe = current_exe().map_err(|err| {
                log::error!("failed to locate the running executable: {err}");
                err
            })?;
            let exe_dir = exe.parent().ok_or_else(|| {
                log::error!(
                    "executable path `{exe}` has no parent directory",
                    exe = exe.display()
                );
                Error::new(ErrorKind::NotFound, "executable path has no parent directory")
            })?;
            BASE_PATH.get_or_init(|| resource_root(exe_dir))
        }
    };
    Ok(if sub_dir.is_empty() {
        base.clone()
    } else {
        base.join(sub_dir)
    })
}

#[cfg(test)]
mod tests {
    use super::{resource_path, resource_root};
    use std::{
        ffi::OsStr,
        path::{Path, PathBuf},
    };

    #[test]
    fn root_replaces_last_bin_component() {
        assert_eq!(
            resource_root(Path::new("/opt/desino/bin")),
            PathBuf::from("/opt/desino/resources")
        );
        // only the last `bin` counts, and trailing segments after it are dropped
        assert_eq!(
            resource_root(Path::new("/opt/bin/desino/bin/debug")),
            PathBuf::from("/opt/bin/desino/resources")
        );
    }

    #[test]
    fn root_without_bin_appends() {
        assert_eq!(
            resource_root(Path::new("/opt/desino")),
            PathBuf::from("/opt/desino/resources")
        );
    }

    #[test]
    fn resolution_is_cached_and_lexical() {
        let base = resource_path("").expect("Test runner location should be known");
        assert_eq!(base.file_name(), Some(OsStr::new("resources")));

        // repeated calls reuse the cached base
        assert_eq!(
            base,
            resource_path("").expect("Test runner location should be known")
        );
        assert_eq!(
            resource_path("fonts").expect("Test runner location should be known"),
            base.join("fonts")
        );
    }
}
