//! Common trait for remote generation executors

use async_trait::async_trait;

use crate::dispatch::{GenerateJob, Tier};
use crate::error::Result;

/// A remote unit of compute bound to a specific accelerator class, exposing a
/// single generation operation.
///
/// The executor itself (model residency, accelerator scheduling, scaling) is
/// operated by an external platform; this trait only models the one remote
/// call the gateway makes against it.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Human-readable executor name, used in logs and error messages
    fn name(&self) -> &str;

    /// The hardware tier this executor serves
    fn tier(&self) -> Tier;

    /// Run one generation job to completion and return the encoded JPEG
    /// bytes. The call blocks (is awaited) until the remote side returns or
    /// fails; the gateway sets no timeout of its own beyond the client's
    /// configured ceiling.
    async fn generate(&self, job: &GenerateJob) -> Result<Vec<u8>>;
}
