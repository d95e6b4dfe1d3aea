//! schedule-ctl - recurring-schedule definition and lifecycle control
//!
//! This crate turns a human-supplied declaration of "when and what to run"
//! into a canonical schedule definition, and manages such schedules on a
//! remote workflow execution service through idempotent lifecycle
//! operations:
//!
//! - **Definition**: calendar and interval timing rules, validity window,
//!   jitter, timezone, overlap policies, initial state, and the job the
//!   schedule starts when it fires
//! - **Lifecycle**: create, update (full replace), pause/unpause, immediate
//!   trigger, time-range backfill, describe, delete, and list
//!
//! The execution service itself is an external collaborator behind the
//! [`client::ScheduleService`] trait; this crate computes no next-run
//! times, persists nothing locally, and never retries a remote call.
//!
//! # Architecture
//!
//! - [`timefmt`]: human time and duration parsing
//! - [`spec`]: calendar/interval parsing and timing-spec assembly
//! - [`schedule`]: action, policies, state, and full-schedule assembly
//! - [`patch`]: narrow mutations (pause, unpause, trigger, backfill)
//! - [`client`]: the remote service seam and its HTTP/JSON implementation
//! - [`ops`]: one entry point per lifecycle operation
//! - [`config`]: client connection settings and caller identity
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use schedule_ctl::{ops, ScheduleContext};
//! use schedule_ctl::client::HttpScheduleService;
//! use schedule_ctl::config::ServiceClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = HttpScheduleService::new(ServiceClientConfig::from_env())?;
//!     let ctx = ScheduleContext::new(Arc::new(service), "default");
//!     let response = ops::describe_schedule(&ctx, "nightly-report").await?;
//!     println!("{response:#}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod ops;
pub mod patch;
pub mod schedule;
pub mod spec;
pub mod timefmt;

use std::sync::Arc;

use client::ScheduleService;

pub use error::{Result, ScheduleError, ServiceError};
pub use patch::{BackfillRequest, SchedulePatch};
pub use schedule::{OverlapPolicy, Schedule, ScheduleOptions};
pub use spec::{CalendarSpec, IntervalSpec, ScheduleSpec};

/// Dependencies shared by every lifecycle operation.
///
/// The service handle, active namespace, and caller identity travel
/// together as an explicit bundle; operations take this instead of
/// reaching for process-wide state.
#[derive(Clone)]
pub struct ScheduleContext {
    /// Remote schedule service handle.
    pub service: Arc<dyn ScheduleService>,
    /// Namespace every request is scoped to.
    pub namespace: String,
    /// Identity stamped on mutating requests.
    pub identity: String,
}

impl ScheduleContext {
    /// Bundle a service handle with a namespace, using the default
    /// `schedule-ctl@<host>` identity.
    pub fn new(service: Arc<dyn ScheduleService>, namespace: impl Into<String>) -> Self {
        Self {
            service,
            namespace: namespace.into(),
            identity: config::default_identity(),
        }
    }

    /// Override the caller identity.
    #[must_use]
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = identity.into();
        self
    }
}

impl std::fmt::Debug for ScheduleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduleContext")
            .field("namespace", &self.namespace)
            .field("identity", &self.identity)
            .finish()
    }
}
