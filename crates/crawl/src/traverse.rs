use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use refscan_extract::{ExtractOptions, Extractor, Record};
use refscan_repository::{Node, NodeIter, Repository};
use serde::Serialize;
use std::io::Write;
use tracing::instrument;

/// Counters for a finished traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Nodes visited, the root included.
    pub nodes: u64,
    /// Asset reference lines written.
    pub assets: u64,
    /// Component reference lines written.
    pub components: u64,
}
impl Stats {
    pub fn records(&self) -> u64 {
        self.assets + self.components
    }
}

/// Walks a subtree and writes every record as one line of JSON.
///
/// Nodes are visited in pre-order. Each node's records are written (and the
/// sink flushed) before the next node is read, so memory use depends on the
/// depth of the tree and not its size. Lines written before a failure stay
/// in the sink.
pub struct Crawler<'r, W> {
    repository: &'r dyn Repository,
    extractor: Extractor<'r>,
    sink: W,
}
impl<'r, W: Write> Crawler<'r, W> {
    pub fn new(repository: &'r dyn Repository, options: &'r ExtractOptions, sink: W) -> Self {
        Self {
            repository,
            extractor: Extractor::new(repository, options),
            sink,
        }
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Visits `root` and every node below it exactly once.
    ///
    /// The first failure aborts the traversal. It is logged with the path of
    /// the offending node and returned as [`ErrorKind::Traversal`].
    #[instrument(skip_all, fields(repository = self.repository.name(), root = root.path()))]
    pub fn traverse(&mut self, root: &Node) -> Result<Stats> {
        tracing::info!("Starting component usage analysis for {}", root.path());
        let repository = self.repository;
        let mut stats = Stats::default();
        self.visit(root, &mut stats)?;
        let mut pending: Vec<NodeIter<'r>> = vec![repository.children(root)];
        while let Some(children) = pending.last_mut() {
            let Some(child) = children.next() else {
                pending.pop();
                continue;
            };
            let child = abort_at("", child.or_raise(|| ErrorKind::Repository))?;
            self.visit(&child, &mut stats)?;
            pending.push(repository.children(&child));
        }
        tracing::info!(
            nodes = stats.nodes,
            assets = stats.assets,
            components = stats.components,
            "Finished component usage analysis"
        );
        Ok(stats)
    }

    fn visit(&mut self, node: &Node, stats: &mut Stats) -> Result<()> {
        stats.nodes += 1;
        abort_at(node.path(), self.emit(node, stats))
    }

    fn emit(&mut self, node: &Node, stats: &mut Stats) -> Result<()> {
        for record in self.extractor.records(node).or_raise(|| ErrorKind::Extract)? {
            self.write_line(&record)?;
            match record {
                Record::Asset(_) => stats.assets += 1,
                Record::Component(_) => stats.components += 1,
            }
        }
        self.sink.flush().or_raise(|| ErrorKind::Write)
    }

    fn write_line(&mut self, record: &Record) -> Result<()> {
        let mut line = serde_json::to_vec(record).or_raise(|| ErrorKind::Serialize)?;
        line.push(b'\n');
        self.sink.write_all(&line).or_raise(|| ErrorKind::Write)
    }
}

fn abort_at<T>(path: &str, result: Result<T>) -> Result<T> {
    result
        .inspect_err(|err| tracing::error!(path, error = ?err, "Failed to process node"))
        .or_raise(|| ErrorKind::Traversal(path.to_string()))
}
