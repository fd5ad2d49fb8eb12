//! File-set loading: read a named list of files from one directory.
//!
//! A set is all-or-nothing. The first file that cannot be read fails the
//! whole call and the error names that file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{ContentError, Result};

/// Join `name` onto `base` after lexical normalization.
///
/// `.` components are dropped, `..` pops a previously pushed component but
/// never climbs above `base`, and root/prefix components are ignored, so the
/// result always stays under `base`.
pub fn clean_join(base: &Path, name: &str) -> PathBuf {
    let mut relative = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::ParentDir => {
                relative.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    base.join(relative)
}

/// Read each named file under `base` into raw bytes.
pub fn read_files_bytes(base: &Path, names: &[&str]) -> Result<BTreeMap<String, Vec<u8>>> {
    read_set(base, names, |path| fs::read(path))
}

/// Read each named file under `base` as UTF-8 text, unchanged.
pub fn read_files_string(base: &Path, names: &[&str]) -> Result<BTreeMap<String, String>> {
    read_set(base, names, |path| fs::read_to_string(path))
}

fn read_set<T>(
    base: &Path,
    names: &[&str],
    read: impl Fn(&Path) -> std::io::Result<T>,
) -> Result<BTreeMap<String, T>> {
    let mut contents = BTreeMap::new();
    for &name in names {
        let path = clean_join(base, name);
        let data = read(&path).map_err(|source| ContentError::Read {
            file: name.to_string(),
            path: path.clone(),
            source,
        })?;
        contents.insert(name.to_string(), data);
    }
    Ok(contents)
}

/// Remove a just-read entry from a file set.
///
/// Sets are keyed by the names passed in, so a miss means the caller asked
/// for a name it never read; the value falls back to empty.
pub(crate) fn take<T: Default>(set: &mut BTreeMap<String, T>, name: &str) -> T {
    set.remove(name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn clean_join_stays_under_base() {
        let base = Path::new("/content/rule");
        assert_eq!(clean_join(base, "summary.md"), PathBuf::from("/content/rule/summary.md"));
        assert_eq!(clean_join(base, "./a/../b.md"), PathBuf::from("/content/rule/b.md"));
        assert_eq!(clean_join(base, "../../etc/passwd"), PathBuf::from("/content/rule/etc/passwd"));
        assert_eq!(clean_join(base, "/abs.md"), PathBuf::from("/content/rule/abs.md"));
    }

    #[test]
    fn reads_text_verbatim() {
        let dir = TempDir::new().unwrap();
        let text = "# Summary\n\n  indented line\r\nunicode: žluťoučký\n";
        fs::write(dir.path().join("summary.md"), text).unwrap();
        fs::write(dir.path().join("reason.md"), "").unwrap();

        let set = read_files_string(dir.path(), &["summary.md", "reason.md"]).unwrap();
        assert_eq!(set["summary.md"], text);
        assert_eq!(set["reason.md"], "");
    }

    #[test]
    fn reads_bytes() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("plugin.yaml"), b"name: x\n").unwrap();

        let set = read_files_bytes(dir.path(), &["plugin.yaml"]).unwrap();
        assert_eq!(set["plugin.yaml"], b"name: x\n".to_vec());
    }

    #[test]
    fn one_missing_file_fails_the_set() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("summary.md"), "ok").unwrap();

        let err = read_files_string(dir.path(), &["summary.md", "reason.md"]).unwrap_err();
        assert_eq!(err.file(), Some("reason.md"));
        match err {
            ContentError::Read { path, source, .. } => {
                assert_eq!(path, dir.path().join("reason.md"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("generic.md"), [0xff, 0xfe, 0x00]).unwrap();

        let err = read_files_string(dir.path(), &["generic.md"]).unwrap_err();
        assert_eq!(err.file(), Some("generic.md"));
    }

    #[test]
    fn take_removes_entry() {
        let mut set = BTreeMap::from([("a".to_string(), "text".to_string())]);
        assert_eq!(take(&mut set, "a"), "text");
        assert!(set.is_empty());
        assert_eq!(take(&mut set, "a"), "");
    }
}
