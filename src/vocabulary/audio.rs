//! Pronunciation playback.
//!
//! Audio is handed to an external player program (`mpv` by default). Playback
//! is fire-and-forget: failures are logged and never reach the UI.

use std::process::Stdio;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use log::{debug, error};
use tokio::process::Command;
use tokio::task::JoinHandle;

use crate::config::AudioConfig;

#[async_trait]
pub trait AudioPlayer: Send + Sync {
    /// Play the audio at `url`, resolving once playback ends.
    async fn play(&self, url: &str) -> Result<()>;
}

/// Plays audio by running a player command with the URL as its last argument.
#[derive(Debug, Clone)]
pub struct CommandAudioPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandAudioPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build the player configured in `[audio]`.
    pub fn from_config(config: &AudioConfig) -> Arc<dyn AudioPlayer> {
        if config.enabled {
            Arc::new(Self::new(config.player.clone(), config.args.clone()))
        } else {
            Arc::new(DisabledAudioPlayer)
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl AudioPlayer for CommandAudioPlayer {
    async fn play(&self, url: &str) -> Result<()> {
        debug!("Playing {} with {}", url, self.program);
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("Failed to start audio player '{}'", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("Audio player '{}' exited with {}: {}", self.program, output.status, stderr.trim());
        }
        Ok(())
    }
}

/// Used when audio is turned off in the configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAudioPlayer;

#[async_trait]
impl AudioPlayer for DisabledAudioPlayer {
    async fn play(&self, _url: &str) -> Result<()> {
        bail!("Audio playback is disabled in the configuration")
    }
}

/// Start playback on the current tokio runtime without waiting for it.
///
/// Returns `None` when no runtime is available; the failure is logged.
pub fn play_in_background(player: Arc<dyn AudioPlayer>, url: String) -> Option<JoinHandle<()>> {
    let handle = match tokio::runtime::Handle::try_current() {
        Ok(handle) => handle,
        Err(e) => {
            error!("Cannot play audio without an async runtime: {e}");
            return None;
        }
    };

    Some(handle.spawn(async move {
        if let Err(e) = player.play(&url).await {
            error!("Error playing audio: {e:#}");
        }
    }))
}
