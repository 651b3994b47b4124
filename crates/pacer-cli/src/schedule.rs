use std::fmt;

use pacer_core::{Backoff, STOP};

/// One line of the printed schedule.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Delay { attempt: u32, millis: i64 },
    Stop { attempt: u32 },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Delay { attempt, millis } => write!(f, "{attempt}\t{millis}"),
            Step::Stop { attempt } => write!(f, "{attempt}\tstop"),
        }
    }
}

/// Evaluates attempts `0..attempts`, ending early at the first [`STOP`].
pub fn schedule(backoff: &dyn Backoff, attempts: u32) -> Vec<Step> {
    let mut steps = Vec::new();
    for attempt in 0..attempts {
        match backoff.next_delay_millis(attempt) {
            STOP => {
                steps.push(Step::Stop { attempt });
                break;
            }
            millis => steps.push(Step::Delay { attempt, millis }),
        }
    }
    steps
}
