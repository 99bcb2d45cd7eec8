//! Client poller
//!
//! One immediate read at start (or right after adopting an optimistic
//! status), then re-reads on the interval only while the last observed
//! status is `working`. A steady status ends the loop. Meant for a
//! single-threaded runtime.

use crate::{CliClientResult, Client};

use fc_core::ServerStatus;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

#[async_trait]
pub trait StatusSource {
    async fn fetch_status(&self) -> CliClientResult<ServerStatus>;
}

#[async_trait]
impl StatusSource for Client {
    async fn fetch_status(&self) -> CliClientResult<ServerStatus> {
        self.status().await
    }
}

/// What the poll loop does next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStep {
    ReadNow,
    WaitThenRead,
    Done,
}

#[derive(Debug, Clone)]
pub struct Poller {
    interval: Duration,
    last: Option<ServerStatus>,
}

impl Poller {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn last_observed(&self) -> Option<ServerStatus> {
        self.last
    }

    /// First step of a fresh loop
    pub fn start(&self) -> PollStep {
        PollStep::ReadNow
    }

    /// Adopt an unconfirmed status, e.g. the target of an accepted action.
    pub fn assume(&mut self, status: ServerStatus) -> PollStep {
        self.last = Some(status);
        PollStep::ReadNow
    }

    /// Fold one read into the state. A failed read leaves the last status untouched.
    pub fn observe(&mut self, result: &CliClientResult<ServerStatus>) -> PollStep {
        match result {
            Ok(status) => {
                self.last = Some(*status);
                if status.is_steady() {
                    PollStep::Done
                } else {
                    PollStep::WaitThenRead
                }
            }
            Err(_) => match self.last {
                Some(status) if status.is_steady() => PollStep::Done,
                _ => PollStep::WaitThenRead,
            },
        }
    }

    /// Drive the loop from `first` until steady or until `cancel` resolves.
    ///
    /// `report` sees every read result in order. Returns the last observed status.
    pub async fn run<S, R, C>(
        mut self,
        source: &S,
        first: PollStep,
        mut report: R,
        cancel: C,
    ) -> Option<ServerStatus>
    where
        S: StatusSource + ?Sized,
        R: FnMut(&CliClientResult<ServerStatus>),
        C: Future<Output = ()>,
    {
        tokio::pin!(cancel);
        let mut step = first;

        loop {
            match step {
                PollStep::Done => return self.last,
                PollStep::WaitThenRead => {
                    tokio::select! {
                        _ = &mut cancel => return self.last,
                        _ = tokio::time::sleep(self.interval) => {}
                    }
                }
                PollStep::ReadNow => {}
            }

            let result = tokio::select! {
                _ = &mut cancel => return self.last,
                result = source.fetch_status() => result,
            };
            report(&result);
            step = self.observe(&result);
        }
    }
}

impl Default for Poller {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}
