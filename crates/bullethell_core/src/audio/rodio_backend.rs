//! Rodio-backed cue playback
//!
//! Samples are loaded up front and decoded per trigger; playback is detached
//! from the caller, so [`CueSink::play`] returns immediately. The output
//! stream handle is not `Send`, which matches the crate's single-threaded
//! update model.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Source};

use super::{AudioCue, CueSink};

/// Audio backend errors
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    /// No usable output device
    #[error("audio device error: {0}")]
    Device(String),

    /// Sample file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sample file could not be decoded
    #[error("decode error: {0}")]
    Decode(String),
}

/// Cue sink playing preloaded samples through the default output device.
pub struct RodioCueSink {
    // Dropping the stream stops all playback; it must outlive the handle.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    samples: HashMap<AudioCue, Vec<u8>>,
}

impl RodioCueSink {
    /// Open the default output device with no samples loaded.
    pub fn new() -> Result<Self, AudioError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AudioError::Device(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
            samples: HashMap::new(),
        })
    }

    /// Load the sample file for a cue, replacing any previous sample.
    ///
    /// The file is decoded once here so a bad asset fails at load time, not
    /// mid-combat.
    pub fn load_cue(&mut self, cue: AudioCue, path: &Path) -> Result<(), AudioError> {
        let bytes = std::fs::read(path)?;
        Decoder::new(Cursor::new(bytes.clone())).map_err(|e| AudioError::Decode(e.to_string()))?;
        self.samples.insert(cue, bytes);
        Ok(())
    }

    /// Check whether a cue has a loaded sample.
    pub fn has_cue(&self, cue: AudioCue) -> bool {
        self.samples.contains_key(&cue)
    }
}

impl CueSink for RodioCueSink {
    fn play(&self, cue: AudioCue) {
        let Some(bytes) = self.samples.get(&cue) else {
            log::warn!("no sample loaded for cue {cue:?}");
            return;
        };
        // Validated at load time; a decode failure here means the sample
        // table was mutated out from under us.
        match Decoder::new(Cursor::new(bytes.clone())) {
            Ok(source) => {
                if let Err(e) = self.handle.play_raw(source.convert_samples()) {
                    log::warn!("cue {cue:?} playback failed: {e}");
                }
            }
            Err(e) => log::warn!("cue {cue:?} decode failed: {e}"),
        }
    }
}
