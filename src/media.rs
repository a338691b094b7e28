//! Pause media players for the duration of a break through `playerctl`.

use std::process::Command;

const PLAYERCTL: &str = "playerctl";
const STATUS_FORMAT: &str = "{{playerName}}:{{status}}";

/// Names of players reported as `Playing` in `playerctl -a metadata` output
/// formatted as `name:status` lines.
pub fn parse_playing_players(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.trim().split_once(':'))
        .filter(|(_, status)| *status == "Playing")
        .map(|(name, _)| name.to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Players paused for the current break.
#[derive(Debug)]
pub struct MediaSession {
    program: String,
    paused: Vec<String>,
}

impl Default for MediaSession {
    fn default() -> Self {
        Self::empty(PLAYERCTL)
    }
}

impl MediaSession {
    fn empty(program: &str) -> Self {
        Self {
            program: program.to_string(),
            paused: Vec::new(),
        }
    }

    /// Remember which players are playing, then pause all of them.
    ///
    /// Failures are logged and produce an empty session.
    pub fn pause_playing() -> Self {
        Self::pause_playing_with(PLAYERCTL)
    }

    /// [`MediaSession::pause_playing`] using `program` in place of
    /// `playerctl`.
    pub fn pause_playing_with(program: &str) -> Self {
        let output = match Command::new(program)
            .args(["-a", "metadata", "--format", STATUS_FORMAT])
            .output()
        {
            Ok(out) => out,
            Err(e) => {
                tracing::warn!("failed to query media players: {e}");
                return Self::empty(program);
            }
        };
        let paused = parse_playing_players(&String::from_utf8_lossy(&output.stdout));
        if paused.is_empty() {
            tracing::debug!("no media playing");
            return Self::empty(program);
        }
        match Command::new(program).args(["-a", "pause"]).status() {
            Ok(status) if status.success() => {
                tracing::info!(players = ?paused, "paused media for break");
            }
            Ok(status) => tracing::warn!("playerctl pause exited with {status}"),
            Err(e) => tracing::warn!("failed to pause media players: {e}"),
        }
        Self {
            program: program.to_string(),
            paused,
        }
    }

    pub fn paused_players(&self) -> &[String] {
        &self.paused
    }

    /// Resume the players paused by [`MediaSession::pause_playing`].
    pub fn resume(&mut self) {
        for player in self.paused.drain(..) {
            match Command::new(&self.program).args(["-p", &player, "play"]).status() {
                Ok(status) if status.success() => tracing::debug!(%player, "resumed"),
                Ok(status) => tracing::warn!(%player, "playerctl play exited with {status}"),
                Err(e) => tracing::warn!(%player, "failed to resume media player: {e}"),
            }
        }
    }
}
