use std::time::{Duration, SystemTime};

use serde_with::serde_as;
use serde_with::TimestampSeconds;

#[serde_as]
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TimerState {
    #[serde_as(as = "TimestampSeconds")]
    pub started_timestamp: SystemTime,
    #[serde_as(as = "Option<TimestampSeconds>")]
    pub ended_timestamp: Option<SystemTime>,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            started_timestamp: SystemTime::now(),
            ended_timestamp: None,
        }
    }
}

impl TimerState {
    pub fn is_ended(&self) -> bool {
        self.ended_timestamp.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        let until_time = self.ended_timestamp.unwrap_or_else(SystemTime::now);

        until_time
            .duration_since(self.started_timestamp)
            .unwrap_or(Duration::default())
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// Render the elapsed time as MM:SS. Minutes are not capped at 60.
    pub fn formatted(&self) -> String {
        let total_secs = self.elapsed_seconds();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }

    pub fn ended(&self, now: SystemTime) -> TimerState {
        let mut new_state = self.clone();
        new_state.ended_timestamp = Some(now);
        new_state
    }
}
