//! Audio cue dispatch
//!
//! The resolver triggers named cues and never waits on playback; everything
//! behind [`CueSink::play`] is fire-and-forget. The default sink only logs,
//! which keeps the core free of audio device requirements. A rodio-backed
//! sink is available behind the `audio` feature.

#[cfg(feature = "audio")]
pub mod rodio_backend;

#[cfg(feature = "audio")]
pub use rodio_backend::{AudioError, RodioCueSink};

/// Named audio cues the combat rules can trigger.
///
/// `Collision` and `EnemyCollision` are wired but not fired by the current
/// rule table; they stay reserved for rules that may use them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// Generic collision feedback (currently unfired)
    Collision,

    /// Player ship destroyed
    Death,

    /// Enemy-on-enemy contact feedback (currently unfired)
    EnemyCollision,

    /// Ship destroyed by weapons fire
    Explosion,
}

/// Fire-and-forget cue playback.
///
/// Implementations must not block; the resolver ignores playback state and
/// outcome entirely.
pub trait CueSink {
    /// Trigger a cue. Never blocks, never fails observably.
    fn play(&self, cue: AudioCue);
}

/// Sink that records cues to the log instead of playing audio.
///
/// Useful for headless hosts and as the default wiring before an audio
/// device is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCueSink;

impl CueSink for LogCueSink {
    fn play(&self, cue: AudioCue) {
        log::debug!("audio cue: {cue:?}");
    }
}
