//! # World Persistence
//!
//! Saves and restores the generated part of a world as a MessagePack document:
//!
//! ```text
//! { "seed": u32,
//!   "chunks": { "cx,cz": { "blocks": bin, "shape": [16, 256, 16] }, ... } }
//! ```
//!
//! `blocks` is the chunk's voxel array in `[x][y][z]` row-major order, one byte
//! per voxel. A load is validated in full before the world is touched, so a
//! failed load leaves the previous state in place.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    chunk::{Chunk, ChunkCoord, CHUNK_SHAPE, CHUNK_VOLUME},
    world::World,
};

/// Errors raised while saving or loading a world.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode world: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rmp_serde::decode::Error,
    },
    #[error("invalid chunk key {0:?}")]
    InvalidChunkKey(String),
    #[error("chunk {key} has shape {shape:?}, expected {expected:?}")]
    InvalidShape {
        key: String,
        shape: Vec<usize>,
        expected: [usize; 3],
    },
    #[error("chunk {key} holds {len} bytes, expected {expected}")]
    InvalidLength {
        key: String,
        len: usize,
        expected: usize,
    },
}

#[derive(Serialize)]
struct SavedWorldRef<'a> {
    seed: u32,
    chunks: BTreeMap<String, SavedChunkRef<'a>>,
}

#[derive(Serialize)]
struct SavedChunkRef<'a> {
    #[serde(with = "serde_bytes")]
    blocks: &'a [u8],
    shape: [usize; 3],
}

#[derive(Deserialize)]
struct SavedWorld {
    seed: u32,
    chunks: BTreeMap<String, SavedChunk>,
}

#[derive(Deserialize)]
struct SavedChunk {
    #[serde(with = "serde_bytes")]
    blocks: Vec<u8>,
    shape: Vec<usize>,
}

fn decode_chunk(key: String, saved: SavedChunk) -> Result<Chunk, PersistenceError> {
    let coord = ChunkCoord::from_key(&key).ok_or_else(|| PersistenceError::InvalidChunkKey(key.clone()))?;
    if saved.shape != CHUNK_SHAPE {
        return Err(PersistenceError::InvalidShape {
            key,
            shape: saved.shape,
            expected: CHUNK_SHAPE,
        });
    }
    Chunk::from_bytes(coord, &saved.blocks).ok_or(PersistenceError::InvalidLength {
        key,
        len: saved.blocks.len(),
        expected: CHUNK_VOLUME,
    })
}

impl World {
    /// Writes the seed and every generated chunk to `path`, creating missing
    /// parent directories.
    ///
    /// # Returns
    /// The number of chunks written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<usize, PersistenceError> {
        let path = path.as_ref();
        let io_error = |source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        };

        let chunks: BTreeMap<String, SavedChunkRef<'_>> = self
            .chunks()
            .filter(|chunk| chunk.generated)
            .map(|chunk| {
                (
                    chunk.position.to_key(),
                    SavedChunkRef {
                        blocks: chunk.as_bytes(),
                        shape: CHUNK_SHAPE,
                    },
                )
            })
            .collect();
        let count = chunks.len();

        let bytes = rmp_serde::to_vec_named(&SavedWorldRef {
            seed: self.seed(),
            chunks,
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        std::fs::write(path, bytes).map_err(io_error)?;

        log::info!("Saved {} chunks to {}", count, path.display());
        Ok(count)
    }

    /// Replaces the world with the contents of `path`.
    ///
    /// Every loaded chunk is generated and dirty, pending generation is dropped,
    /// and neighbor links are rebuilt. On any error the world is unchanged.
    ///
    /// # Returns
    /// The number of chunks loaded.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, PersistenceError> {
        let path = path.as_ref();
        let result = Self::read_save(path);
        match result {
            Ok((seed, chunks)) => {
                let count = chunks.len();
                self.replace_contents(seed, chunks);
                log::info!("Loaded {} chunks from {} (seed {})", count, path.display(), seed);
                Ok(count)
            }
            Err(err) => {
                log::warn!("Rejected world file {}: {}", path.display(), err);
                Err(err)
            }
        }
    }

    fn read_save(path: &Path) -> Result<(u32, Vec<Chunk>), PersistenceError> {
        let bytes = std::fs::read(path).map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let saved: SavedWorld =
            rmp_serde::from_slice(&bytes).map_err(|source| PersistenceError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        let chunks = saved
            .chunks
            .into_iter()
            .map(|(key, chunk)| decode_chunk(key, chunk))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((saved.seed, chunks))
    }
}
