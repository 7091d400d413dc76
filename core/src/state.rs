//! The widget's state cell.
//!
//! [`UploadState`] owns the single [`FitResult`] the widget may hold and
//! the lifecycle of the requests feeding it. It does no I/O: a caller
//! calls [`UploadState::begin`] when a file is selected, runs the request
//! however it likes, and hands the outcome back to [`UploadState::resolve`]
//! together with the [`Ticket`] it was given.
//!
//! Which resolution ends up in the cell depends on the [`ApplyPolicy`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FitError;
use crate::types::FitResult;

/// How overlapping requests are reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplyPolicy {
    /// Whichever response arrives last overwrites the result, even if its
    /// request was issued earlier.
    #[default]
    LastResolved,
    /// Responses to requests older than the last applied one are ignored.
    LatestRequest,
}

impl fmt::Display for ApplyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyPolicy::LastResolved => write!(f, "last-resolved"),
            ApplyPolicy::LatestRequest => write!(f, "latest-request"),
        }
    }
}

impl FromStr for ApplyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "last-resolved" | "last_resolved" => Ok(ApplyPolicy::LastResolved),
            "latest-request" | "latest_request" => Ok(ApplyPolicy::LatestRequest),
            other => Err(format!("unknown apply policy '{}'", other)),
        }
    }
}

/// Where the widget is in its request lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Handle for one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    epoch: u64,
}

impl Ticket {
    /// Monotonic sequence number, starting at 1.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What [`UploadState::resolve`] did with a response.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The result cell now holds this response.
    Applied,
    /// The request failed; the result cell is unchanged.
    Failed(FitError),
    /// A newer request was already applied; the response was dropped.
    Superseded,
    /// The state was reset after the request was issued.
    Discarded,
}

/// Explicit state cell for the upload widget.
#[derive(Debug, Clone, Default)]
pub struct UploadState {
    policy: ApplyPolicy,
    result: Option<FitResult>,
    status: RequestStatus,
    next_seq: u64,
    last_applied: u64,
    pending: usize,
    epoch: u64,
}

impl UploadState {
    pub fn new(policy: ApplyPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> ApplyPolicy {
        self.policy
    }

    /// The most recently applied result, if any.
    pub fn result(&self) -> Option<&FitResult> {
        self.result.as_ref()
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    /// Number of issued requests not yet resolved.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Register a new request. Does not cancel requests already in flight.
    pub fn begin(&mut self) -> Ticket {
        self.next_seq += 1;
        self.pending += 1;
        self.status = RequestStatus::InFlight;
        Ticket {
            seq: self.next_seq,
            epoch: self.epoch,
        }
    }

    /// Fold the outcome of a request back into the state.
    ///
    /// A failure never touches the result. A success replaces it wholesale.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<FitResult, FitError>) -> Resolution {
        if ticket.epoch != self.epoch {
            return Resolution::Discarded;
        }
        self.pending = self.pending.saturating_sub(1);

        let stale = self.policy == ApplyPolicy::LatestRequest && ticket.seq < self.last_applied;

        match outcome {
            Ok(_) if stale => {
                self.settle_status();
                Resolution::Superseded
            }
            Ok(result) => {
                self.result = Some(result);
                self.last_applied = self.last_applied.max(ticket.seq);
                self.status = if self.pending > 0 {
                    RequestStatus::InFlight
                } else {
                    RequestStatus::Succeeded
                };
                Resolution::Applied
            }
            Err(err) => {
                if stale {
                    self.settle_status();
                } else {
                    self.status = if self.pending > 0 {
                        RequestStatus::InFlight
                    } else {
                        RequestStatus::Failed
                    };
                }
                Resolution::Failed(err)
            }
        }
    }

    /// Clear the result and forget every request issued so far.
    pub fn reset(&mut self) {
        self.result = None;
        self.status = RequestStatus::Idle;
        self.last_applied = 0;
        self.pending = 0;
        self.epoch += 1;
    }

    // Status after an ignored resolution: keep the last settled outcome.
    fn settle_status(&mut self) {
        if self.pending == 0 && self.status == RequestStatus::InFlight {
            self.status = if self.result.is_some() {
                RequestStatus::Succeeded
            } else {
                RequestStatus::Idle
            };
        }
    }
}
