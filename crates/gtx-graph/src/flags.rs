use std::fmt::Debug;

use gtx_core::errors::GraphError;
use gtx_core::rng::RngHandle;
use gtx_core::{Graph, Multigraph};
use serde::{Deserialize, Serialize};

use crate::shuffle::{shuffle_preserve_type_with_rng, shuffle_preserve_with_rng};

/// Serializable parameters for a degree-preserving shuffle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleConfig {
    /// Swap attempts made per edge; must be at least one.
    #[serde(default = "default_shuffles_per_edge")]
    pub shuffles_per_edge: usize,
    /// Seed for reproducible runs. `None` draws a fresh generator per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_shuffles_per_edge() -> usize {
    1
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            shuffles_per_edge: default_shuffles_per_edge(),
            seed: None,
        }
    }
}

impl ShuffleConfig {
    /// Config attempting `shuffles_per_edge` swaps per edge with a fixed seed.
    pub fn seeded(shuffles_per_edge: usize, seed: u64) -> Self {
        Self {
            shuffles_per_edge,
            seed: Some(seed),
        }
    }

    /// Checks the config without touching any graph.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.shuffles_per_edge == 0 {
            return Err(GraphError::invalid_argument(
                "non-positive-shuffles",
                "must shuffle at least once",
            )
            .with_context("shuffles_per_edge", self.shuffles_per_edge)
            .with_hint("set shuffles_per_edge to 1 or more"));
        }
        Ok(())
    }

    /// Generator described by this config.
    pub fn rng(&self) -> RngHandle {
        match self.seed {
            Some(seed) => RngHandle::from_seed(seed),
            None => RngHandle::from_entropy(),
        }
    }

    /// Runs [`shuffle_preserve_with_rng`](crate::shuffle_preserve_with_rng) with this config.
    pub fn shuffle<G: Graph + ?Sized>(&self, graph: &mut G) -> Result<usize, GraphError> {
        self.validate()?;
        let mut rng = self.rng();
        shuffle_preserve_with_rng(graph, self.shuffles_per_edge, &mut rng)
    }

    /// Runs [`shuffle_preserve_type_with_rng`](crate::shuffle_preserve_type_with_rng) with this config.
    pub fn shuffle_by_type<T, G>(&self, graph: &mut G) -> Result<usize, GraphError>
    where
        T: Debug,
        G: Multigraph<T> + ?Sized,
    {
        self.validate()?;
        let mut rng = self.rng();
        shuffle_preserve_type_with_rng(graph, self.shuffles_per_edge, &mut rng)
    }
}
