//! File type classification.
//!
//! A file's category is the primary component of its media type
//! (`text/plain` → `text`). The media type is guessed from the file name's
//! extension; an optional magic-number probe covers files whose name gives
//! nothing away. Classification never fails: anything unrecognised is
//! [`UNKNOWN`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Category for files with no recognised media type
pub const UNKNOWN: &str = "unknown";

/// Bytes read from the head of a file for signature probing
const PROBE_LEN: usize = 64;

/// Suffixes that stand for a longer compound suffix
const SUFFIX_ALIASES: &[(&str, &str)] = &[
    (".svgz", ".svg.gz"),
    (".tgz", ".tar.gz"),
    (".taz", ".tar.gz"),
    (".tz", ".tar.gz"),
    (".tbz2", ".tar.bz2"),
    (".tbz", ".tar.bz2"),
    (".txz", ".tar.xz"),
];

/// Content-encoding suffixes stripped before the media type lookup
const ENCODING_SUFFIXES: &[&str] = &[".gz", ".Z", ".bz2", ".xz", ".br"];

// ─── Extension table ──────────────────────────────────────────────────────────

/// Known extensions (lowercase, with the leading dot) and their media types
const MEDIA_TYPES: &[(&str, &str)] = &[
    // application
    (".json", "application/json"),
    (".webmanifest", "application/manifest+json"),
    (".doc", "application/msword"),
    (".dot", "application/msword"),
    (".docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    (".xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    (".pptx", "application/vnd.openxmlformats-officedocument.presentationml.presentation"),
    (".odt", "application/vnd.oasis.opendocument.text"),
    (".ods", "application/vnd.oasis.opendocument.spreadsheet"),
    (".odp", "application/vnd.oasis.opendocument.presentation"),
    (".bin", "application/octet-stream"),
    (".a", "application/octet-stream"),
    (".dll", "application/octet-stream"),
    (".exe", "application/octet-stream"),
    (".o", "application/octet-stream"),
    (".obj", "application/octet-stream"),
    (".so", "application/octet-stream"),
    (".pdf", "application/pdf"),
    (".p7c", "application/pkcs7-mime"),
    (".ps", "application/postscript"),
    (".ai", "application/postscript"),
    (".eps", "application/postscript"),
    (".rtf", "application/rtf"),
    (".m3u", "application/vnd.apple.mpegurl"),
    (".m3u8", "application/vnd.apple.mpegurl"),
    (".xls", "application/vnd.ms-excel"),
    (".xlb", "application/vnd.ms-excel"),
    (".ppt", "application/vnd.ms-powerpoint"),
    (".pot", "application/vnd.ms-powerpoint"),
    (".pps", "application/vnd.ms-powerpoint"),
    (".wasm", "application/wasm"),
    (".epub", "application/epub+zip"),
    (".jar", "application/java-archive"),
    (".csh", "application/x-csh"),
    (".dvi", "application/x-dvi"),
    (".gtar", "application/x-gtar"),
    (".hdf", "application/x-hdf"),
    (".h5", "application/x-hdf5"),
    (".latex", "application/x-latex"),
    (".nc", "application/x-netcdf"),
    (".p12", "application/x-pkcs12"),
    (".pfx", "application/x-pkcs12"),
    (".pyc", "application/x-python-code"),
    (".pyo", "application/x-python-code"),
    (".sh", "application/x-sh"),
    (".swf", "application/x-shockwave-flash"),
    (".tar", "application/x-tar"),
    (".tcl", "application/x-tcl"),
    (".tex", "application/x-tex"),
    (".texi", "application/x-texinfo"),
    (".texinfo", "application/x-texinfo"),
    (".man", "application/x-troff-man"),
    (".xsl", "application/xml"),
    (".rdf", "application/xml"),
    (".wsdl", "application/xml"),
    (".zip", "application/zip"),
    (".7z", "application/x-7z-compressed"),
    (".rar", "application/vnd.rar"),
    (".deb", "application/vnd.debian.binary-package"),
    (".rpm", "application/x-rpm"),
    (".dmg", "application/x-apple-diskimage"),
    (".iso", "application/x-iso9660-image"),
    (".sqlite", "application/vnd.sqlite3"),
    (".db", "application/vnd.sqlite3"),
    // audio
    (".3gp", "audio/3gpp"),
    (".3gpp", "audio/3gpp"),
    (".3g2", "audio/3gpp2"),
    (".aac", "audio/aac"),
    (".au", "audio/basic"),
    (".snd", "audio/basic"),
    (".mp3", "audio/mpeg"),
    (".mp2", "audio/mpeg"),
    (".m4a", "audio/mp4"),
    (".opus", "audio/opus"),
    (".ogg", "audio/ogg"),
    (".oga", "audio/ogg"),
    (".flac", "audio/flac"),
    (".aif", "audio/x-aiff"),
    (".aifc", "audio/x-aiff"),
    (".aiff", "audio/x-aiff"),
    (".ra", "audio/x-pn-realaudio"),
    (".wav", "audio/vnd.wave"),
    (".mid", "audio/midi"),
    (".midi", "audio/midi"),
    // font
    (".otf", "font/otf"),
    (".ttf", "font/ttf"),
    (".woff", "font/woff"),
    (".woff2", "font/woff2"),
    // image
    (".avif", "image/avif"),
    (".bmp", "image/bmp"),
    (".gif", "image/gif"),
    (".ief", "image/ief"),
    (".jpg", "image/jpeg"),
    (".jpe", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".heic", "image/heic"),
    (".heif", "image/heif"),
    (".png", "image/png"),
    (".svg", "image/svg+xml"),
    (".tiff", "image/tiff"),
    (".tif", "image/tiff"),
    (".ico", "image/vnd.microsoft.icon"),
    (".psd", "image/vnd.adobe.photoshop"),
    (".webp", "image/webp"),
    (".ras", "image/x-cmu-raster"),
    (".pnm", "image/x-portable-anymap"),
    (".pbm", "image/x-portable-bitmap"),
    (".pgm", "image/x-portable-graymap"),
    (".ppm", "image/x-portable-pixmap"),
    (".rgb", "image/x-rgb"),
    (".xbm", "image/x-xbitmap"),
    (".xpm", "image/x-xpixmap"),
    (".xwd", "image/x-xwindowdump"),
    // message
    (".eml", "message/rfc822"),
    (".mht", "message/rfc822"),
    (".mhtml", "message/rfc822"),
    // text
    (".css", "text/css"),
    (".csv", "text/csv"),
    (".html", "text/html"),
    (".htm", "text/html"),
    (".js", "text/javascript"),
    (".mjs", "text/javascript"),
    (".md", "text/markdown"),
    (".markdown", "text/markdown"),
    (".txt", "text/plain"),
    (".bat", "text/plain"),
    (".c", "text/plain"),
    (".h", "text/plain"),
    (".ksh", "text/plain"),
    (".pl", "text/plain"),
    (".srt", "text/plain"),
    (".log", "text/plain"),
    (".ini", "text/plain"),
    (".conf", "text/plain"),
    (".rtx", "text/richtext"),
    (".tsv", "text/tab-separated-values"),
    (".vtt", "text/vtt"),
    (".py", "text/x-python"),
    (".rs", "text/rust"),
    (".toml", "text/x-toml"),
    (".yaml", "text/yaml"),
    (".yml", "text/yaml"),
    (".java", "text/x-java"),
    (".cpp", "text/x-c++src"),
    (".hpp", "text/x-c++hdr"),
    (".sgm", "text/x-sgml"),
    (".sgml", "text/x-sgml"),
    (".vcf", "text/x-vcard"),
    (".xml", "text/xml"),
    // video
    (".mp4", "video/mp4"),
    (".m4v", "video/mp4"),
    (".mpeg", "video/mpeg"),
    (".m1v", "video/mpeg"),
    (".mpa", "video/mpeg"),
    (".mpe", "video/mpeg"),
    (".mpg", "video/mpeg"),
    (".mov", "video/quicktime"),
    (".qt", "video/quicktime"),
    (".webm", "video/webm"),
    (".mkv", "video/x-matroska"),
    (".avi", "video/x-msvideo"),
    (".movie", "video/x-sgi-movie"),
];

// ─── Signature table ──────────────────────────────────────────────────────────

/// Magic numbers at offset zero and the media type they identify
const SIGNATURES: &[(&[u8], &str)] = &[
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xff\xd8\xff", "image/jpeg"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"BM", "image/bmp"),
    (b"II*\x00", "image/tiff"),
    (b"MM\x00*", "image/tiff"),
    (b"\x00\x00\x01\x00", "image/vnd.microsoft.icon"),
    (b"%PDF-", "application/pdf"),
    (b"%!PS", "application/postscript"),
    (b"{\\rtf", "application/rtf"),
    (b"PK\x03\x04", "application/zip"),
    (b"PK\x05\x06", "application/zip"),
    (b"\x1f\x8b", "application/gzip"),
    (b"BZh", "application/x-bzip2"),
    (b"\xfd7zXZ\x00", "application/x-xz"),
    (b"7z\xbc\xaf\x27\x1c", "application/x-7z-compressed"),
    (b"Rar!\x1a\x07", "application/vnd.rar"),
    (b"\x7fELF", "application/x-executable"),
    (b"\xcf\xfa\xed\xfe", "application/x-mach-binary"),
    (b"\xce\xfa\xed\xfe", "application/x-mach-binary"),
    (b"MZ", "application/x-msdownload"),
    (b"\x00asm", "application/wasm"),
    (b"SQLite format 3\x00", "application/vnd.sqlite3"),
    (b"ID3", "audio/mpeg"),
    (b"fLaC", "audio/flac"),
    (b"OggS", "audio/ogg"),
    (b"\x1a\x45\xdf\xa3", "video/x-matroska"),
    (b"<?xml", "text/xml"),
    (b"<!DOCTYPE html", "text/html"),
    (b"<!doctype html", "text/html"),
    (b"<html", "text/html"),
];

// ─── Lookups ──────────────────────────────────────────────────────────────────

/// Split a file name into stem and extension (extension keeps its dot).
/// Leading dots belong to the stem, so `.bashrc` has no extension.
fn split_ext(name: &str) -> (&str, &str) {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(i) => name.split_at(leading + i),
        None => (name, ""),
    }
}

fn lookup(ext: &str) -> Option<&'static str> {
    let find = |key: &str| {
        MEDIA_TYPES
            .iter()
            .find(|(e, _)| *e == key)
            .map(|(_, media)| *media)
    };
    find(ext).or_else(|| find(ext.to_ascii_lowercase().as_str()))
}

/// Guess the media type of a path from its file name alone
pub fn media_type_for(path: &Path) -> Option<&'static str> {
    let name = path.file_name()?.to_string_lossy();
    let mut name = name.into_owned();

    // Expand aliases such as `.tgz` → `.tar.gz`
    loop {
        let (stem, ext) = split_ext(&name);
        match SUFFIX_ALIASES.iter().find(|(alias, _)| *alias == ext) {
            Some((_, expanded)) => name = format!("{}{}", stem, expanded),
            None => break,
        }
    }

    let (stem, ext) = split_ext(&name);
    let ext = if ENCODING_SUFFIXES.contains(&ext) {
        split_ext(stem).1
    } else {
        ext
    };

    if ext.is_empty() {
        return None;
    }
    lookup(ext)
}

/// Identify a media type from the first bytes of a file
pub fn sniff_media_type(head: &[u8]) -> Option<&'static str> {
    // Container formats with the discriminator past offset zero
    if head.len() >= 12 && &head[0..4] == b"RIFF" {
        return match &head[8..12] {
            b"WEBP" => Some("image/webp"),
            b"WAVE" => Some("audio/vnd.wave"),
            b"AVI " => Some("video/x-msvideo"),
            _ => None,
        };
    }
    if head.len() >= 12 && &head[4..8] == b"ftyp" {
        return match &head[8..12] {
            b"heic" | b"heix" => Some("image/heic"),
            b"avif" => Some("image/avif"),
            b"qt  " => Some("video/quicktime"),
            b"M4A " => Some("audio/mp4"),
            _ => Some("video/mp4"),
        };
    }

    SIGNATURES
        .iter()
        .find(|(magic, _)| head.starts_with(magic))
        .map(|(_, media)| *media)
}

/// Primary component of a media type (`image/jpeg` → `image`)
pub fn category_of(media_type: &str) -> &str {
    media_type.split('/').next().unwrap_or(media_type)
}

/// Classify a path by its extension only.
///
/// Pure function of the path string: no filesystem access.
pub fn classify_path(path: &Path) -> String {
    media_type_for(path)
        .map(|m| category_of(m).to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Classify a file, falling back to a content probe when `probe` is set and
/// the extension is not recognised. Read failures yield [`UNKNOWN`].
pub fn classify_file(path: &Path, probe: bool) -> String {
    if let Some(media) = media_type_for(path) {
        return category_of(media).to_string();
    }
    if !probe {
        return UNKNOWN.to_string();
    }

    match read_head(path) {
        Ok(head) => sniff_media_type(&head)
            .map(|m| category_of(m).to_string())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        Err(e) => {
            tracing::debug!("signature probe failed for {}: {}", path.display(), e);
            UNKNOWN.to_string()
        }
    }
}

fn read_head(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut head = Vec::with_capacity(PROBE_LEN);
    File::open(path)?
        .take(PROBE_LEN as u64)
        .read_to_end(&mut head)?;
    Ok(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(name: &str) -> String {
        classify_path(Path::new(name))
    }

    #[test]
    fn test_common_extensions() {
        assert_eq!(cat("test.txt"), "text");
        assert_eq!(cat("photo.jpg"), "image");
        assert_eq!(cat("song.mp3"), "audio");
        assert_eq!(cat("clip.mp4"), "video");
        assert_eq!(cat("report.pdf"), "application");
        assert_eq!(cat("font.woff2"), "font");
        assert_eq!(cat("mail.eml"), "message");
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert_eq!(cat("PHOTO.JPG"), "image");
        assert_eq!(cat("Notes.TxT"), "text");
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(cat("Makefile"), UNKNOWN);
        assert_eq!(cat("archive.xyz123"), UNKNOWN);
        assert_eq!(cat(".bashrc"), UNKNOWN);
        assert_eq!(cat("trailing."), UNKNOWN);
        assert_eq!(cat(""), UNKNOWN);
        assert_eq!(cat("/"), UNKNOWN);
        assert_eq!(cat("dir.d/noext"), UNKNOWN);
    }

    #[test]
    fn test_dotfile_with_extension() {
        assert_eq!(cat(".config.json"), "application");
    }

    #[test]
    fn test_encoding_suffix_stripped() {
        assert_eq!(media_type_for(Path::new("backup.tar.gz")), Some("application/x-tar"));
        assert_eq!(media_type_for(Path::new("notes.txt.bz2")), Some("text/plain"));
        assert_eq!(cat("notes.gz"), UNKNOWN);
    }

    #[test]
    fn test_suffix_aliases() {
        assert_eq!(media_type_for(Path::new("src.tgz")), Some("application/x-tar"));
        assert_eq!(media_type_for(Path::new("logo.svgz")), Some("image/svg+xml"));
        assert_eq!(media_type_for(Path::new("dump.txz")), Some("application/x-tar"));
    }

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("text/plain"), "text");
        assert_eq!(category_of("image/svg+xml"), "image");
        assert_eq!(category_of("weird"), "weird");
    }

    #[test]
    fn test_sniff_signatures() {
        assert_eq!(sniff_media_type(b"\x89PNG\r\n\x1a\n\0\0"), Some("image/png"));
        assert_eq!(sniff_media_type(b"%PDF-1.7\n"), Some("application/pdf"));
        assert_eq!(sniff_media_type(b"RIFF\0\0\0\0WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff_media_type(b"\0\0\0\x18ftypisom"), Some("video/mp4"));
        assert_eq!(sniff_media_type(b"\x7fELF\x02\x01"), Some("application/x-executable"));
        assert_eq!(sniff_media_type(b"hello world"), None);
        assert_eq!(sniff_media_type(b""), None);
    }

    #[test]
    fn test_classify_file_probe() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("picture");
        std::fs::write(&png, b"\x89PNG\r\n\x1a\nrest").unwrap();

        assert_eq!(classify_file(&png, false), UNKNOWN);
        assert_eq!(classify_file(&png, true), "image");
    }

    #[test]
    fn test_classify_file_prefers_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.txt");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        assert_eq!(classify_file(&path, true), "text");
    }

    #[test]
    fn test_classify_file_missing_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(classify_file(&dir.path().join("gone"), true), UNKNOWN);
    }
}
