//! Follows the server log and keeps the online roster on disk.

use crate::{GameError, Result, Roster, RosterEvent, RosterSnapshot};

use std::future::Future;
use std::io::SeekFrom;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use log::{error, info};
use tokio::io::{AsyncReadExt, AsyncSeekExt};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_ERROR_BACKOFF: Duration = Duration::from_secs(5);

pub struct PlayerLogMonitor {
    log_path: PathBuf,
    state_path: PathBuf,
    roster: Roster,
    position: u64,
    /// Roster changed but the last save failed
    unsaved: bool,
    poll_interval: Duration,
    error_backoff: Duration,
}

impl PlayerLogMonitor {
    /// Restore the saved roster and start following from the current end of the log.
    pub async fn open(log_path: impl Into<PathBuf>, state_path: impl Into<PathBuf>) -> Self {
        let log_path = log_path.into();
        let state_path = state_path.into();
        let roster = RosterSnapshot::restore(&state_path).await;

        let position = match tokio::fs::metadata(&log_path).await {
            Ok(metadata) => metadata.len(),
            Err(_) => 0,
        };

        info!(
            "Monitoring {} from byte {} ({} players restored)",
            log_path.display(),
            position,
            roster.len()
        );

        Self {
            log_path,
            state_path,
            roster,
            position,
            unsaved: false,
            poll_interval: DEFAULT_POLL_INTERVAL,
            error_backoff: DEFAULT_ERROR_BACKOFF,
        }
    }

    pub fn with_intervals(mut self, poll_interval: Duration, error_backoff: Duration) -> Self {
        self.poll_interval = poll_interval;
        self.error_backoff = error_backoff;
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    /// Read whatever complete lines were appended since the last poll.
    ///
    /// Returns the number of roster changes. A partial trailing line is
    /// left for the next poll. A missing log resets the read position, as
    /// does a log that shrank. The roster is saved once per batch; a failed
    /// save keeps the applied events in memory and is retried next poll.
    pub async fn poll_once(&mut self) -> Result<usize> {
        let mut file = match tokio::fs::File::open(&self.log_path).await {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.position = 0;
                return self.save_if_needed().await.map(|_| 0);
            }
            Err(e) => return Err(GameError::from(e)),
        };

        if file.metadata().await?.len() < self.position {
            info!("{} was truncated, reading from the start", self.log_path.display());
            self.position = 0;
        }

        file.seek(SeekFrom::Start(self.position)).await?;
        let mut appended = Vec::new();
        file.read_to_end(&mut appended).await?;

        let Some(last_newline) = appended.iter().rposition(|b| *b == b'\n') else {
            return self.save_if_needed().await.map(|_| 0);
        };
        let complete = &appended[..=last_newline];
        self.position += complete.len() as u64;

        let mut changes = 0;
        for line in String::from_utf8_lossy(complete).lines() {
            let Some(event) = RosterEvent::parse(line) else {
                continue;
            };
            if !self.roster.apply(&event) {
                continue;
            }
            changes += 1;

            match &event {
                RosterEvent::Joined(name) => info!("Player joined: {}", name),
                RosterEvent::Left(name) => info!("Player left: {}", name),
            }
            info!("Current players: {}", self.roster.players().join(", "));
        }

        if changes > 0 {
            self.unsaved = true;
        }
        self.save_if_needed().await?;

        Ok(changes)
    }

    async fn save_if_needed(&mut self) -> Result<()> {
        if !self.unsaved {
            return Ok(());
        }
        RosterSnapshot::of(&self.roster, Utc::now())
            .save(&self.state_path)
            .await?;
        self.unsaved = false;
        Ok(())
    }

    /// Poll until `shutdown` resolves. IO errors are logged and retried after the backoff.
    pub async fn run<F>(mut self, shutdown: F) -> Roster
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            let delay = match self.poll_once().await {
                Ok(_) => self.poll_interval,
                Err(e) => {
                    error!("Error monitoring log: {}", e);
                    self.error_backoff
                }
            };

            tokio::select! {
                _ = &mut shutdown => {
                    info!("Player monitor stopping");
                    return self.roster;
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }
}
