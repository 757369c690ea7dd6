use thiserror::Error;

/// Reasons why a byte sequence can not be accepted as a canonical object frame,
/// or why an object can not be framed in the first place.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FrameError {
    /// There is no NUL byte terminating the header.
    #[error("object header is not terminated by a NUL byte")]
    MissingNul,

    /// The header has no space between type and length.
    #[error("object header has no space between type and length")]
    MissingSpace,

    /// The type tag is empty or contains a delimiter byte.
    #[error("invalid object type `{0}`")]
    InvalidKind(String),

    /// The length field is not a canonical decimal integer.
    #[error("invalid object length `{0}`")]
    InvalidLength(String),

    /// The length field disagrees with the number of content bytes.
    #[error("object declares {declared} bytes of content but has {actual}")]
    SizeMismatch { declared: usize, actual: usize },
}

/// Build the header that precedes the content in a canonical frame:
/// `<type> SP <decimal length> NUL`.
pub(crate) fn header(kind: &[u8], len: usize) -> Vec<u8> {
    let len = len.to_string();
    let mut h = Vec::with_capacity(kind.len() + len.len() + 2);
    h.extend_from_slice(kind);
    h.push(b' ');
    h.extend_from_slice(len.as_bytes());
    h.push(0);
    h
}

/// Split a canonical frame into its type tag and content.
///
/// The content is split off the end of `frame` without copying.
pub(crate) fn split(mut frame: Vec<u8>) -> Result<(Vec<u8>, Vec<u8>), FrameError> {
    let nul = frame
        .iter()
        .position(|b| *b == 0)
        .ok_or(FrameError::MissingNul)?;

    let content = frame.split_off(nul + 1);
    frame.truncate(nul);

    let (kind, len) = split_once(&frame, &b' ').ok_or(FrameError::MissingSpace)?;

    if kind.is_empty() {
        return Err(FrameError::InvalidKind(String::new()));
    }

    let declared = parse_len(len)?;
    if declared != content.len() {
        return Err(FrameError::SizeMismatch {
            declared,
            actual: content.len(),
        });
    }

    Ok((kind.to_vec(), content))
}

fn split_once<'a>(s: &'a [u8], c: &u8) -> Option<(&'a [u8], &'a [u8])> {
    s.iter().position(|b| b == c).map(|n| (&s[0..n], &s[n + 1..]))
}

fn parse_len(len: &[u8]) -> Result<usize, FrameError> {
    let invalid = || FrameError::InvalidLength(String::from_utf8_lossy(len).into_owned());

    let canonical = match len {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        _ => len.iter().all(u8::is_ascii_digit),
    };

    if !canonical {
        return Err(invalid());
    }

    // All bytes are ASCII digits at this point, so only overflow can fail.
    std::str::from_utf8(len)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(invalid)
}
