//! Serde helpers that write paths as strings, replacing invalid UTF-8 with
//! `U+FFFD` instead of failing the whole document.

use serde::ser::{SerializeSeq, Serializer};
use std::path::{Path, PathBuf};

pub fn serialize_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

pub fn serialize_lossy_list<S: Serializer>(
    paths: &[PathBuf],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(paths.len()))?;
    for path in paths {
        seq.serialize_element(&path.to_string_lossy())?;
    }
    seq.end()
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use std::path::PathBuf;

    #[derive(Serialize)]
    struct Entry {
        #[serde(serialize_with = "super::serialize_lossy")]
        path: PathBuf,
        #[serde(serialize_with = "super::serialize_lossy_list")]
        more: Vec<PathBuf>,
    }

    #[test]
    fn test_utf8_paths_unchanged() {
        let entry = Entry {
            path: PathBuf::from("dir/a.txt"),
            more: vec![PathBuf::from("b"), PathBuf::from("c")],
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"path":"dir/a.txt","more":["b","c"]}"#);
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_utf8_replaced() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let bad = PathBuf::from(OsStr::from_bytes(b"bad\xffname.txt"));
        let entry = Entry {
            path: bad.clone(),
            more: vec![bad],
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            "{\"path\":\"bad\u{FFFD}name.txt\",\"more\":[\"bad\u{FFFD}name.txt\"]}"
        );
    }
}
