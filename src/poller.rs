//! The polling loop: fetch, validate, render, notify, sleep.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::domain::render_status;
use crate::error::Result;
use crate::port::{HomeworkApi, Messenger};

/// Pause between polls, measured from the end of one pass to the start of
/// the next.
pub const POLL_PERIOD: Duration = Duration::from_secs(600);

/// Announcement prefix for operational failures.
const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Owns the poll cursor and the last announced error.
///
/// Single sequential task; no other component reads or writes this state,
/// so no synchronization is needed.
pub struct Poller<A, M> {
    api: A,
    messenger: M,
    cursor: i64,
    last_error: Option<String>,
}

impl<A: HomeworkApi, M: Messenger> Poller<A, M> {
    #[must_use]
    pub fn new(api: A, messenger: M, start_cursor: i64) -> Self {
        Self {
            api,
            messenger,
            cursor: start_cursor,
            last_error: None,
        }
    }

    /// Poll forever. Only process shutdown ends the loop.
    pub async fn run(&mut self) {
        info!(period_secs = POLL_PERIOD.as_secs(), "poller started");
        loop {
            self.poll_once().await;
            tokio::time::sleep(POLL_PERIOD).await;
        }
    }

    /// One full pass. Failures are fully contained here: logged, announced
    /// through the channel (deduplicated), and the cursor stays put.
    pub async fn poll_once(&mut self) {
        if let Err(e) = self.try_poll().await {
            error!(error = %e, "poll failed");
            self.notify_error(&format!("{FAILURE_PREFIX}: {e}")).await;
        }
    }

    /// Timestamp lower bound for the next poll.
    #[must_use]
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    async fn try_poll(&mut self) -> Result<()> {
        let feed = self.api.fetch(self.cursor).await?;
        let homeworks = feed.homeworks()?;

        // Only the most recent entry is announced, per the API's
        // most-recent-first ordering.
        match homeworks.first() {
            Some(entry) => {
                let text = render_status(entry)?;
                self.notify(&text).await;
            }
            None => debug!("no homework updates"),
        }

        // The cursor advances only once the whole pass has succeeded, so a
        // failed pass re-requests the same window next time.
        if let Some(ts) = feed.current_date() {
            self.cursor = ts;
        }
        Ok(())
    }

    /// Send a status notification. Delivery failures never stop the loop.
    async fn notify(&self, text: &str) {
        match self.messenger.send(text).await {
            Ok(()) => info!(text, "notification sent"),
            Err(e) => warn!(error = %e, "notification delivery failed"),
        }
    }

    /// Announce an operational failure, suppressing a repeat of the
    /// previous announcement. The comparison is only against the message
    /// announced last; a successful pass does not reset it, so a fault
    /// recurring after recovery stays suppressed.
    async fn notify_error(&mut self, text: &str) {
        if self.last_error.as_deref() == Some(text) {
            debug!("suppressing repeated error announcement");
            return;
        }
        if let Err(e) = self.messenger.send(text).await {
            warn!(error = %e, "error announcement delivery failed");
        }
        self.last_error = Some(text.to_string());
    }
}
