//! Graph documents: the on-disk form of a labelled weighted graph
//!
//! A document lists optional vertices and a set of weighted edges between
//! string labels. JSON and TOML share one schema:
//!
//! ```toml
//! directed = true
//! vertices = ["1", "2", "3"]
//!
//! [[edges]]
//! from = "1"
//! to = "2"
//! weight = 3.0
//! ```
//!
//! Edge endpoints missing from `vertices` are added in order of first use.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfinderError};
use crate::graph::{Graph, VertexId};

/// Serialisation used by a graph document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from a file extension (`.json` or `.toml`)
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(DocumentFormat::Json),
            Some("toml") => Ok(DocumentFormat::Toml),
            _ => Err(WayfinderError::invalid_document(
                path,
                "expected a .json or .toml file",
            )),
        }
    }
}

/// A vertex entry: a bare label, or a label with a weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexEntry {
    Label(String),
    Weighted {
        label: String,
        /// Absent for unreachable vertices in algorithm output
        #[serde(default, skip_serializing_if = "Option::is_none")]
        weight: Option<f64>,
    },
}

impl VertexEntry {
    pub fn label(&self) -> &str {
        match self {
            VertexEntry::Label(label) | VertexEntry::Weighted { label, .. } => label,
        }
    }

    fn weight(&self) -> f64 {
        match self {
            VertexEntry::Weighted {
                weight: Some(weight),
                ..
            } => *weight,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeEntry {
    pub from: String,
    pub to: String,
    #[serde(default = "default_edge_weight")]
    pub weight: f64,
}

fn default_edge_weight() -> f64 {
    1.0
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Falls back to the configured default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<VertexEntry>,

    #[serde(default)]
    pub edges: Vec<EdgeEntry>,

    #[serde(skip)]
    origin: Option<PathBuf>,
}

/// A graph whose vertices carry their document labels
#[derive(Debug)]
pub struct LabeledGraph {
    pub graph: Graph<String>,
    pub labels: HashMap<String, VertexId>,
}

impl LabeledGraph {
    /// Look up the vertex for a required `source` label
    pub fn resolve(&self, label: Option<&str>) -> Result<VertexId> {
        self.resolve_as(label, "source")
    }

    /// Look up the vertex for a required label reported as `name` when absent
    pub fn resolve_as(&self, label: Option<&str>, name: &str) -> Result<VertexId> {
        let label = label.ok_or_else(|| WayfinderError::null_argument(name))?;
        self.labels
            .get(label)
            .copied()
            .ok_or_else(|| WayfinderError::vertex_not_found(label))
    }

    /// Label of a vertex of `graph`
    pub fn label(&self, vertex: VertexId) -> Result<&str> {
        Ok(self.graph.vertex(vertex)?.data().as_str())
    }
}

impl GraphDocument {
    /// Read and parse a document, choosing the format by extension
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let format = DocumentFormat::from_path(path)?;
        let text = fs::read_to_string(path)?;
        let mut document = Self::parse(&text, format)
            .map_err(|e| WayfinderError::invalid_document(path, e))?;
        document.origin = Some(path.to_path_buf());

        tracing::debug!(
            vertices = document.vertices.len(),
            edges = document.edges.len(),
            "document_loaded"
        );
        Ok(document)
    }

    pub fn parse(text: &str, format: DocumentFormat) -> Result<Self> {
        match format {
            DocumentFormat::Json => Ok(serde_json::from_str(text)?),
            DocumentFormat::Toml => Ok(toml::from_str(text)?),
        }
    }

    /// Build the in-memory graph.
    ///
    /// Declared vertices keep their order; undeclared edge endpoints follow
    /// in order of first use. Weights must be finite and non-negative.
    pub fn build(&self, default_directed: bool) -> Result<LabeledGraph> {
        let mut graph = Graph::new(self.directed.unwrap_or(default_directed));
        let mut labels: HashMap<String, VertexId> = HashMap::new();

        for entry in &self.vertices {
            let label = entry.label();
            if labels.contains_key(label) {
                return Err(WayfinderError::invalid_document(
                    self.origin(),
                    format!("duplicate vertex label {label:?}"),
                ));
            }
            check_weight("vertex weight", label, entry.weight())?;
            let id = graph.add_vertex_with_weight(label.to_string(), entry.weight());
            labels.insert(label.to_string(), id);
        }

        for edge in &self.edges {
            check_weight(
                "edge weight",
                &format!("{} -> {}", edge.from, edge.to),
                edge.weight,
            )?;
            let from = intern(&mut graph, &mut labels, &edge.from);
            let to = intern(&mut graph, &mut labels, &edge.to);
            graph.add_edge(from, to, edge.weight)?;
        }

        Ok(LabeledGraph { graph, labels })
    }

    /// Describe a labelled graph (typically an algorithm result) as a document
    pub fn from_graph(graph: &Graph<String>) -> Result<Self> {
        let vertices = graph
            .vertices()
            .map(|vertex| VertexEntry::Weighted {
                label: vertex.data().clone(),
                weight: vertex.weight().is_finite().then_some(vertex.weight()),
            })
            .collect();

        let edges = graph
            .edges()
            .map(|edge| {
                Ok(EdgeEntry {
                    from: graph.vertex(edge.from_vertex())?.data().clone(),
                    to: graph.vertex(edge.to_vertex())?.data().clone(),
                    weight: edge.weight(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(GraphDocument {
            directed: Some(graph.is_directed()),
            vertices,
            edges,
            origin: None,
        })
    }

    fn origin(&self) -> PathBuf {
        self.origin
            .clone()
            .unwrap_or_else(|| PathBuf::from("<inline>"))
    }
}

fn check_weight(context: &str, subject: &str, weight: f64) -> Result<()> {
    if !weight.is_finite() || weight < 0.0 {
        crate::bail_invalid!(context, format!("{subject}: {weight}"));
    }
    Ok(())
}

fn intern(
    graph: &mut Graph<String>,
    labels: &mut HashMap<String, VertexId>,
    label: &str,
) -> VertexId {
    if let Some(&id) = labels.get(label) {
        return id;
    }
    let id = graph.add_vertex(label.to_string());
    labels.insert(label.to_string(), id);
    id
}
