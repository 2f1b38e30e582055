use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, TryLockError};

use crate::foundation::error::{StoryError, StoryResult};

static REGISTRY: Mutex<Option<Arc<EncoderSandbox>>> = Mutex::new(None);

/// Process-wide handle to the external encoding engine.
///
/// Loaded lazily the first time a compile needs it. Loading is single-flight:
/// the registry lock is held across the probe, so concurrent callers block on
/// the same load and observe the cached handle afterwards. Once ready the
/// handle stays ready for the process lifetime; a failed load leaves the
/// registry uninitialized so a later user-triggered attempt can retry.
pub struct EncoderSandbox {
    compile_gate: Mutex<()>,
}

impl EncoderSandbox {
    /// Get the shared sandbox, loading it if required.
    ///
    /// Fails with [`StoryError::EncoderUnavailable`] when the encoder binary
    /// cannot be found.
    pub fn shared() -> StoryResult<Arc<Self>> {
        let mut slot = REGISTRY
            .lock()
            .map_err(|_| StoryError::encoder_unavailable("encoder registry lock poisoned"))?;
        if let Some(sandbox) = slot.as_ref() {
            return Ok(sandbox.clone());
        }

        let sandbox = Arc::new(Self::load()?);
        *slot = Some(sandbox.clone());
        Ok(sandbox)
    }

    fn load() -> StoryResult<Self> {
        if !is_ffmpeg_on_path() {
            return Err(StoryError::encoder_unavailable(
                "ffmpeg is required for MP4 export, but was not found on PATH",
            ));
        }
        Ok(Self {
            compile_gate: Mutex::new(()),
        })
    }

    /// Acquire the single-compile gate without blocking.
    ///
    /// The staging filesystem and naming scheme are shared, so a second
    /// compile while one is in flight is refused rather than interleaved.
    pub(crate) fn try_begin_compile(&self) -> StoryResult<CompileGuard<'_>> {
        match self.compile_gate.try_lock() {
            Ok(guard) => Ok(CompileGuard { _guard: guard }),
            Err(TryLockError::WouldBlock) => Err(StoryError::CompileBusy),
            Err(TryLockError::Poisoned(_)) => {
                Err(StoryError::encoder_unavailable("compile gate poisoned"))
            }
        }
    }

    /// Create a fresh staging directory for one compile.
    pub(crate) fn stage_dir(&self) -> StoryResult<StageDirGuard> {
        use anyhow::Context as _;

        let dir = std::env::temp_dir().join(format!(
            "storyreel_stage_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(0)
        ));
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create staging directory '{}'", dir.display()))?;
        Ok(StageDirGuard { path: dir })
    }
}

/// Mutual-exclusion token held for the duration of one compile.
pub(crate) struct CompileGuard<'a> {
    _guard: MutexGuard<'a, ()>,
}

/// Staging directory removed wholesale on drop.
///
/// Partial staging state after a failure is indeterminate and is never
/// reused; discarding the whole directory is the only recovery.
pub(crate) struct StageDirGuard {
    path: PathBuf,
}

impl StageDirGuard {
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StageDirGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sandbox.rs"]
mod tests;
