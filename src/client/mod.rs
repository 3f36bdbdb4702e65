//! vCenter API collaborator.
//!
//! Everything network-facing lives here: session lifecycle and host
//! discovery against the vCenter Automation API. The evaluation core never
//! sees wire types, only the assembled [`HostRuntimeSnapshot`].
//!
//! [`HostRuntimeSnapshot`]: crate::core::runtime_check::HostRuntimeSnapshot

pub mod host;
pub mod session;

pub use host::fetch_host_runtime;
pub use session::{SessionOptions, VsphereSession};
