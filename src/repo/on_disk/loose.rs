use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use tempfile::NamedTempFile;
use tracing::debug;

use super::OnDisk;
use crate::object::{Id, Object};
use crate::repo::{Error, Result};

impl OnDisk {
    /// Return the path where the loose object with the given ID is stored:
    /// `.git/objects/<first two hex digits>/<remaining 38 hex digits>`.
    pub fn loose_object_path(&self, id: &Id) -> PathBuf {
        let mut path = self.objects_dir();
        path.push(id.shard());
        path.push(id.file_name());
        path
    }

    /// Write a loose object into the repository and return its ID.
    ///
    /// The object is compressed into a temporary file in its fan-out
    /// directory and then renamed into place. If an object with the same ID
    /// already exists, it is left untouched.
    ///
    /// Analogous to [`git hash-object -w`](https://git-scm.com/docs/git-hash-object).
    pub fn put_loose_object(&mut self, object: &Object) -> Result<Id> {
        let frame = object.frame();
        let id = object.id();

        let object_path = self.loose_object_path(&id);
        if object_path.is_file() {
            debug!(%id, "loose object already present");
            return Ok(id);
        }

        let shard_dir = self.objects_dir().join(id.shard());
        fs::create_dir_all(&shard_dir)?;

        let mut temp = NamedTempFile::new_in(&shard_dir)?;
        {
            let mut encoder = ZlibEncoder::new(&mut temp, Compression::default());
            encoder.write_all(&frame)?;
            encoder.finish()?;
        }

        temp.persist(&object_path).map_err(|err| err.error)?;

        debug!(%id, kind = %object.kind(), len = object.len(), "wrote loose object");
        Ok(id)
    }

    /// Read a loose object from the repository.
    ///
    /// Fails with `Error::ObjectNotFound` if there is no such object,
    /// `Error::CorruptObject` if it can't be decompressed, and
    /// `Error::MalformedObjectFrame` if the decompressed bytes are not a
    /// well-formed object (including a length that doesn't match the content).
    pub fn get_loose_object(&self, id: &Id) -> Result<Object> {
        let object_path = self.loose_object_path(id);

        let compressed = match fs::read(&object_path) {
            Ok(compressed) => compressed,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ObjectNotFound(*id))
            }
            Err(err) => return Err(err.into()),
        };

        let frame =
            inflate(&compressed).map_err(|source| Error::CorruptObject { id: *id, source })?;

        let object = Object::from_frame(frame)
            .map_err(|source| Error::MalformedObjectFrame { id: *id, source })?;

        debug!(%id, kind = %object.kind(), len = object.len(), "read loose object");
        Ok(object)
    }

    /// Read a loose object given its ID in hex form.
    ///
    /// Fails with `Error::InvalidId` (without touching the file system)
    /// if `hex` is not a 40-digit lowercase hex string.
    pub fn get_loose_object_by_hex(&self, hex: &str) -> Result<Object> {
        let id = hex.parse().map_err(|source| Error::InvalidId {
            value: hex.to_string(),
            source,
        })?;
        self.get_loose_object(&id)
    }
}

/// Decompress a complete zlib stream.
///
/// Unlike `flate2::read::ZlibDecoder`, this fails if the input ends before
/// the end of the stream (including its checksum) has been reached.
fn inflate(compressed: &[u8]) -> io::Result<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(compressed.len() * 2 + 64);

    loop {
        let before_in = inflater.total_in();
        let before_out = inflater.total_out();

        let status = inflater
            .decompress_vec(
                &compressed[before_in as usize..],
                &mut out,
                FlushDecompress::Finish,
            )
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

        if let Status::StreamEnd = status {
            return Ok(out);
        }

        if out.len() == out.capacity() {
            out.reserve(out.capacity());
            continue;
        }

        let consumed_all = inflater.total_in() as usize == compressed.len();
        let stalled = inflater.total_in() == before_in && inflater.total_out() == before_out;

        if consumed_all || stalled {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "compressed stream ended early",
            ));
        }
    }
}
