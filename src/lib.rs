//! Core of a changeset browsing panel: history listing, per-changeset file
//! lists, filtering and sorting, and workspace switching against an
//! asynchronous version-control provider.

pub mod config;
pub mod list;
pub mod model;
pub mod notify;
pub mod orchestrator;
pub mod paths;
pub mod provider;
pub mod version;

pub use crate::config::{FromDate, PanelConfig};
pub use crate::orchestrator::{Clock, Orchestrator, SwitchRejected, SystemClock};
pub use crate::provider::{Completion, Provider, ProviderEvent, Request, Response};
pub use crate::version::{Capability, SoftwareVersion};
