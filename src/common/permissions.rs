use std::fs::Metadata;

/// POSIX "other" write bit (`S_IWOTH`)
pub const OTHER_WRITE: u32 = 0o002;

/// Check if a raw permission mode grants write access to "other" users
pub fn is_world_writable(mode: u32) -> bool {
    mode & OTHER_WRITE != 0
}

/// Raw permission bits for a file.
///
/// Platforms without POSIX modes report `0`, so nothing is ever considered
/// world-writable there.
#[cfg(unix)]
pub fn raw_mode(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

#[cfg(not(unix))]
pub fn raw_mode(_metadata: &Metadata) -> u32 {
    0
}

/// Render the low nine permission bits as `rwxr-xr-x`
pub fn format_mode(mode: u32) -> String {
    const FLAGS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];
    FLAGS
        .iter()
        .map(|&(bit, c)| if mode & bit != 0 { c } else { '-' })
        .collect()
}
