use std::fmt::{self, Write};
use std::str::FromStr;

use thiserror::Error;

/// Number of bytes in a SHA-1 digest.
pub const ID_LEN: usize = 20;

/// An error which can be returned when parsing an object ID.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ParseIdError {
    /// Value being parsed is empty.
    #[error("cannot parse object ID from empty string")]
    Empty,

    /// Contains an invalid digit.
    ///
    /// Uppercase hex digits are rejected too. Object IDs are always written
    /// in lowercase, both on disk and on output.
    #[error("value contains invalid digit `{0}`")]
    InvalidDigit(char),

    /// ID string is longer than 40 digits.
    #[error("value is more than 40 digits long")]
    Overflow,

    /// ID string is shorter than 40 digits.
    #[error("value is less than 40 digits long")]
    Underflow,
}

/// An object ID is the SHA-1 digest of an object's canonical frame.
/// It is stored as a 20-byte signature, but can also be represented as 40 hex digits.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Id {
    id: [u8; ID_LEN],
}

impl Id {
    /// Create a new ID from a 20-byte slice.
    ///
    /// It is an error if the slice contains anything other than 20 bytes.
    pub fn new(id: &[u8]) -> Result<Id, ParseIdError> {
        match id.len() {
            ID_LEN => {
                let mut bytes = [0; ID_LEN];
                bytes.copy_from_slice(id);
                Ok(Id { id: bytes })
            }
            0 => Err(ParseIdError::Empty),
            n if n < ID_LEN => Err(ParseIdError::Underflow),
            _ => Err(ParseIdError::Overflow),
        }
    }

    /// Convert a 40-character hex ID to an object ID.
    ///
    /// It is an error if the ID contains anything other than 40 lowercase hex digits.
    pub fn from_hex<T: AsRef<[u8]>>(id: T) -> Result<Id, ParseIdError> {
        let hex = id.as_ref();

        match hex.len() {
            40 => {
                let mut bytes = [0; ID_LEN];
                for (byte, pair) in bytes.iter_mut().zip(hex.chunks(2)) {
                    *byte = digit_value(pair[0])? << 4 | digit_value(pair[1])?;
                }

                Ok(Id { id: bytes })
            }
            0 => Err(ParseIdError::Empty),
            n if n < 40 => Err(ParseIdError::Underflow),
            _ => Err(ParseIdError::Overflow),
        }
    }

    /// Return the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.id
    }

    /// Return the name of the fan-out directory for this ID,
    /// which is the first two hex digits.
    pub fn shard(&self) -> String {
        hex(&self.id[..1])
    }

    /// Return the file name for this ID within its fan-out directory,
    /// which is the remaining 38 hex digits.
    pub fn file_name(&self) -> String {
        hex(&self.id[1..])
    }
}

impl From<[u8; ID_LEN]> for Id {
    fn from(id: [u8; ID_LEN]) -> Id {
        Id { id }
    }
}

impl FromStr for Id {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::from_hex(s.as_bytes())
    }
}

static CHARS: &[u8] = b"0123456789abcdef";

fn hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        s.push(CHARS[(byte >> 4) as usize].into());
        s.push(CHARS[(byte & 0xf) as usize].into());
    }
    s
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in self.id.iter() {
            f.write_char(CHARS[(byte >> 4) as usize].into())?;
            f.write_char(CHARS[(byte & 0xf) as usize].into())?;
        }

        Ok(())
    }
}

fn digit_value(c: u8) -> Result<u8, ParseIdError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        _ => Err(ParseIdError::InvalidDigit(c as char)),
    }
}
