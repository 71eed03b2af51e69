//! Handoff graph between the agents of one scenario.
//!
//! Edges are declared up front and checked once at build time; the graph is
//! never mutated afterwards.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{AgencyError, AgencyResult};

/// Directed adjacency list keyed by agent name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HandoffGraph {
    edges: BTreeMap<String, Vec<String>>,
}

impl HandoffGraph {
    pub fn builder<I, S>(agents: I) -> HandoffGraphBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        HandoffGraphBuilder {
            agents: agents.into_iter().map(Into::into).collect(),
            edges: Vec::new(),
        }
    }

    /// Agents `from` may hand off to, in declaration order
    pub fn targets(&self, from: &str) -> &[String] {
        self.edges.get(from).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn can_hand_off(&self, from: &str, to: &str) -> bool {
        self.targets(from).iter().any(|t| t == to)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count() == 0
    }
}

pub struct HandoffGraphBuilder {
    agents: Vec<String>,
    edges: Vec<(String, String)>,
}

impl HandoffGraphBuilder {
    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.edges.push((from.into(), to.into()));
        self
    }

    /// Declare edges in both directions
    pub fn bidirectional(self, a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        self.edge(a.clone(), b.clone()).edge(b, a)
    }

    pub fn build(self) -> AgencyResult<HandoffGraph> {
        let mut edges: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (from, to) in self.edges {
            for endpoint in [&from, &to] {
                if !self.agents.contains(endpoint) {
                    return Err(AgencyError::Handoff(format!(
                        "'{}' is not an agent of this scenario",
                        endpoint
                    )));
                }
            }
            if from == to {
                return Err(AgencyError::Handoff(format!("'{}' cannot hand off to itself", from)));
            }

            let targets = edges.entry(from).or_default();
            if !targets.contains(&to) {
                targets.push(to);
            }
        }

        Ok(HandoffGraph { edges })
    }
}
