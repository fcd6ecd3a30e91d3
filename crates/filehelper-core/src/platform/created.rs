/// Creation-time lookup.
///
/// Windows and macOS report a real birth time. Many Unix filesystems do
/// not, so on Unix the inode status-change time is used when the birth
/// time is unsupported.
use std::fs::Metadata;
use std::io;
use std::time::SystemTime;

/// Best available creation timestamp for a file.
pub fn creation_time(meta: &Metadata) -> io::Result<SystemTime> {
    match meta.created() {
        Ok(t) => Ok(t),
        Err(err) => fallback(meta, err),
    }
}

#[cfg(unix)]
fn fallback(meta: &Metadata, err: io::Error) -> io::Result<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::Duration;

    if err.kind() != io::ErrorKind::Unsupported {
        return Err(err);
    }
    let secs = meta.ctime();
    let nanos = meta.ctime_nsec().clamp(0, 999_999_999) as u32;
    if secs >= 0 {
        Ok(SystemTime::UNIX_EPOCH + Duration::new(secs as u64, nanos))
    } else {
        SystemTime::UNIX_EPOCH
            .checked_sub(Duration::new(secs.unsigned_abs(), 0))
            .ok_or(err)
    }
}

#[cfg(not(unix))]
fn fallback(_meta: &Metadata, err: io::Error) -> io::Result<SystemTime> {
    Err(err)
}
