//! A minimal content-addressable object store using git's loose object format.
//!
//! Objects are framed as `<type> SP <length> NUL <content>`, identified by the
//! SHA-1 digest of that frame, and stored zlib-compressed under
//! `.git/objects/<2 hex digits>/<38 hex digits>`.
//!
//! * `object` describes objects and their IDs without touching the file system.
//! * `repo` finds, creates, and validates repositories and reads and writes
//!   objects in them.

#![deny(warnings)]

pub mod object;
pub mod repo;
