//! Two-slot executor pool keyed by hardware tier

use std::sync::Arc;

use crate::config::ExecutorsConfig;
use crate::dispatch::Tier;
use crate::error::Result;
use crate::executor::http_executor::HttpExecutor;
use crate::executor::traits::Executor;

/// Holds exactly one executor per tier.
///
/// There is no load balancing or health tracking here: each tier maps to a
/// single remote unit, and scaling of instances behind that unit belongs to
/// the external platform.
pub struct ExecutorPool {
    small: Arc<dyn Executor>,
    large: Arc<dyn Executor>,
}

impl ExecutorPool {
    /// Build the pool from configuration, one HTTP executor per tier
    pub fn from_config(config: &ExecutorsConfig) -> Result<Self> {
        Ok(Self {
            small: Arc::new(HttpExecutor::new(Tier::Small, &config.small)?),
            large: Arc::new(HttpExecutor::new(Tier::Large, &config.large)?),
        })
    }

    /// Build a pool from preconstructed executors
    pub fn new(small: Arc<dyn Executor>, large: Arc<dyn Executor>) -> Self {
        Self { small, large }
    }

    /// Select the executor serving the given tier
    pub fn get(&self, tier: Tier) -> Arc<dyn Executor> {
        match tier {
            Tier::Small => self.small.clone(),
            Tier::Large => self.large.clone(),
        }
    }
}
