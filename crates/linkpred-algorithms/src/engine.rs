//! Top-k link prediction
//!
//! Scores every unordered non-adjacent vertex pair of a graph and keeps the
//! k highest-scoring ones.

use super::common::{GraphError, GraphResult, VertexId, VertexPair};
use super::representation::GraphStore;
use super::similarity::{DegeneratePolicy, Metric};
use super::topk::{TopK, TopKSelector};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Link prediction configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Similarity metric used to score pairs
    pub metric: Metric,
    /// Number of pairs to return
    pub k: usize,
    /// Worker threads: None uses the global rayon pool, Some(1) runs sequentially
    pub threads: Option<usize>,
    /// Adamic/Adar handling of degree <= 1 neighbours
    pub degenerate: DegeneratePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            metric: Metric::CommonNeighbors,
            k: 10,
            threads: None,
            degenerate: DegeneratePolicy::Skip,
        }
    }
}

/// Counters from one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanStats {
    /// Non-adjacent pairs that were scored
    pub candidates: u64,
    /// Pairs skipped because an edge already exists
    pub adjacent: u64,
}

/// Neighbour sets and degrees materialised once per vertex
struct Neighborhoods {
    /// Ascending; pair enumeration order follows it
    vertices: Vec<VertexId>,
    sets: Vec<BTreeSet<VertexId>>,
    degrees: FxHashMap<VertexId, usize>,
}

impl Neighborhoods {
    fn collect(graph: &dyn GraphStore) -> GraphResult<Self> {
        let vertices: Vec<VertexId> = graph.vertex_set().into_iter().collect();
        let sets = vertices
            .iter()
            .map(|&v| graph.neighbors(v))
            .collect::<GraphResult<Vec<_>>>()?;
        let degrees = vertices
            .iter()
            .zip(&sets)
            .map(|(&v, set)| (v, set.len()))
            .collect();

        Ok(Self {
            vertices,
            sets,
            degrees,
        })
    }

    /// A neighbour with no entry of its own has no recorded neighbours
    fn degree(&self, vertex: VertexId) -> usize {
        self.degrees.get(&vertex).copied().unwrap_or(0)
    }
}

/// Partial result of a scan over some rows
struct ScanState {
    selector: TopKSelector,
    stats: ScanStats,
}

impl ScanState {
    fn new(k: usize) -> Self {
        Self {
            selector: TopKSelector::new(k),
            stats: ScanStats::default(),
        }
    }

    fn merge(self, other: ScanState) -> ScanState {
        ScanState {
            selector: self.selector.merge(other.selector),
            stats: ScanStats {
                candidates: self.stats.candidates + other.stats.candidates,
                adjacent: self.stats.adjacent + other.stats.adjacent,
            },
        }
    }
}

/// Pairwise link prediction over any [`GraphStore`]
pub struct LinkPredictor {
    config: EngineConfig,
}

impl LinkPredictor {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ranked top-k non-adjacent pairs, descending by score
    pub fn predict(&self, graph: &dyn GraphStore) -> GraphResult<TopK> {
        self.predict_with_stats(graph).map(|(top, _)| top)
    }

    /// Like [`predict`](Self::predict), also returning scan counters
    pub fn predict_with_stats(&self, graph: &dyn GraphStore) -> GraphResult<(TopK, ScanStats)> {
        if self.config.k == 0 {
            return Err(GraphError::InvalidConfiguration(
                "k must be a positive integer".to_string(),
            ));
        }

        let hood = Neighborhoods::collect(graph)?;
        let n = hood.vertices.len();
        info!(
            "Scoring {} vertex pairs over {} vertices with {} (k = {})",
            n * n.saturating_sub(1) / 2,
            n,
            self.config.metric,
            self.config.k
        );

        let state = match self.config.threads {
            Some(0) => {
                return Err(GraphError::InvalidConfiguration(
                    "thread count must be positive".to_string(),
                ))
            }
            Some(1) => self.scan_sequential(graph, &hood)?,
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| GraphError::InvalidConfiguration(e.to_string()))?;
                pool.install(|| self.scan_parallel(graph, &hood))?
            }
            None => self.scan_parallel(graph, &hood)?,
        };

        info!(
            "Scored {} candidate pairs, skipped {} adjacent pairs",
            state.stats.candidates, state.stats.adjacent
        );
        let top = state.selector.finalize();
        if !top.is_saturated() {
            debug!(
                "Only {} of {} slots filled: fewer candidates than k",
                top.entries().len(),
                top.capacity()
            );
        }

        Ok((top, state.stats))
    }

    fn scan_sequential(&self, graph: &dyn GraphStore, hood: &Neighborhoods) -> GraphResult<ScanState> {
        let mut state = ScanState::new(self.config.k);
        for i in 0..hood.vertices.len() {
            self.scan_row(graph, hood, i, &mut state)?;
        }
        Ok(state)
    }

    /// Rows of the pair triangle are split across workers, each folding into
    /// a local selector; partial selectors are merged afterwards.
    fn scan_parallel(&self, graph: &dyn GraphStore, hood: &Neighborhoods) -> GraphResult<ScanState> {
        let k = self.config.k;
        (0..hood.vertices.len())
            .into_par_iter()
            .try_fold(
                || ScanState::new(k),
                |mut state, i| -> GraphResult<ScanState> {
                    self.scan_row(graph, hood, i, &mut state)?;
                    Ok(state)
                },
            )
            .try_reduce(|| ScanState::new(k), |a, b| Ok(a.merge(b)))
    }

    /// Score pairs (i, j) for all j > i
    fn scan_row(
        &self,
        graph: &dyn GraphStore,
        hood: &Neighborhoods,
        i: usize,
        state: &mut ScanState,
    ) -> GraphResult<()> {
        let u = hood.vertices[i];
        for j in (i + 1)..hood.vertices.len() {
            let v = hood.vertices[j];
            if graph.contains_edge(u, v)? {
                state.stats.adjacent += 1;
                continue;
            }

            let score = self.config.metric.score_with(
                &hood.sets[i],
                &hood.sets[j],
                |w| Ok(hood.degree(w)),
                self.config.degenerate,
            )?;
            state.stats.candidates += 1;
            state.selector.offer(score, VertexPair::new(u, v));
        }
        Ok(())
    }
}

/// Convenience wrapper: top-k pairs of `graph` under `metric`
pub fn top_k_links(graph: &dyn GraphStore, metric: Metric, k: usize) -> GraphResult<TopK> {
    LinkPredictor::new(EngineConfig {
        metric,
        k,
        ..EngineConfig::default()
    })
    .predict(graph)
}
