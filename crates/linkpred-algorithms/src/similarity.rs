//! Neighbourhood similarity metrics
//!
//! Scores for a vertex pair computed from the two neighbour sets.

use super::common::{GraphError, GraphResult, VertexId};
use super::representation::GraphStore;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Metric selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Metric {
    CommonNeighbors,
    Jaccard,
    AdamicAdar,
}

/// How Adamic/Adar treats a common neighbour of degree <= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DegeneratePolicy {
    /// The neighbour contributes nothing to the sum
    #[default]
    Skip,
    /// Scoring fails with `DegenerateNeighbor`
    Fail,
}

/// Size of the intersection
pub fn common_neighbors(a: &BTreeSet<VertexId>, b: &BTreeSet<VertexId>) -> usize {
    a.intersection(b).count()
}

/// |A ∩ B| / |A ∪ B|, or 0.0 when both sets are empty
pub fn jaccard(a: &BTreeSet<VertexId>, b: &BTreeSet<VertexId>) -> f64 {
    let intersection = common_neighbors(a, b);
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Sum of 1 / ln(degree(w)) over common neighbours w.
///
/// `degree` is asked only for members of the intersection.
pub fn adamic_adar<F>(
    a: &BTreeSet<VertexId>,
    b: &BTreeSet<VertexId>,
    degree: F,
    policy: DegeneratePolicy,
) -> GraphResult<f64>
where
    F: Fn(VertexId) -> GraphResult<usize>,
{
    let mut sum = 0.0;
    for &w in a.intersection(b) {
        let d = degree(w)?;
        if d <= 1 {
            match policy {
                DegeneratePolicy::Skip => continue,
                DegeneratePolicy::Fail => return Err(GraphError::DegenerateNeighbor(w)),
            }
        }
        sum += 1.0 / (d as f64).ln();
    }
    Ok(sum)
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::CommonNeighbors, Metric::Jaccard, Metric::AdamicAdar];

    /// Score a pair given its neighbour sets and a degree lookup
    pub fn score_with<F>(
        &self,
        a: &BTreeSet<VertexId>,
        b: &BTreeSet<VertexId>,
        degree: F,
        policy: DegeneratePolicy,
    ) -> GraphResult<f64>
    where
        F: Fn(VertexId) -> GraphResult<usize>,
    {
        match self {
            Metric::CommonNeighbors => Ok(common_neighbors(a, b) as f64),
            Metric::Jaccard => Ok(jaccard(a, b)),
            Metric::AdamicAdar => adamic_adar(a, b, degree, policy),
        }
    }

    /// Score a pair, looking degrees up in the graph. A neighbour the graph
    /// does not index has degree 0.
    pub fn score(
        &self,
        graph: &dyn GraphStore,
        a: &BTreeSet<VertexId>,
        b: &BTreeSet<VertexId>,
        policy: DegeneratePolicy,
    ) -> GraphResult<f64> {
        let degree = |w| {
            if graph.contains_vertex(w) {
                graph.degree(w)
            } else {
                Ok(0)
            }
        };
        self.score_with(a, b, degree, policy)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::CommonNeighbors => "neighbors",
            Metric::Jaccard => "jaccard",
            Metric::AdamicAdar => "adamic-adar",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Metric {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "neighbors" | "common-neighbors" | "common_neighbors" | "cn" => {
                Ok(Metric::CommonNeighbors)
            }
            "jaccard" => Ok(Metric::Jaccard),
            "adamic-adar" | "adamic/adar" | "adamic_adar" | "aa" => Ok(Metric::AdamicAdar),
            other => Err(GraphError::InvalidConfiguration(format!(
                "unknown metric '{}' (expected neighbors, jaccard or adamic-adar)",
                other
            ))),
        }
    }
}

impl TryFrom<String> for Metric {
    type Error = GraphError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Metric> for String {
    fn from(metric: Metric) -> Self {
        metric.to_string()
    }
}
