use crate::controller::{Controller, Operation};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Maximum path variables captured without heap allocation.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Extracted path-variable storage.
///
/// Variable names come from the static route table and are shared
/// `Arc<str>`s; values are per-request strings.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// One segment of a compiled path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Variable(Arc<str>),
}

/// A compiled route: normalized template, its segments and the operation.
#[derive(Debug)]
pub struct RouteEntry {
    pub template: String,
    pub segments: Vec<Segment>,
    pub operation: Arc<Operation>,
}

/// Result of matching a request path against the table.
#[derive(Debug)]
pub struct RouteMatch {
    pub operation: Arc<Operation>,
    pub path_params: ParamVec,
}

impl RouteMatch {
    /// The captured path variable `name`.
    ///
    /// When a template repeats a variable name the last occurrence wins.
    #[must_use]
    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Immutable mapping from normalized path templates to operations.
///
/// Built once at startup by [`RouteTable::build`]; matching scans entries in
/// registration order. Registering two operations with the same normalized
/// template keeps the later operation in the earlier entry's position
/// (last write wins, documented behavior).
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Compiles `controllers` into a route table.
    #[must_use]
    pub fn build(controllers: Vec<Controller>) -> Self {
        let mut entries: Vec<RouteEntry> = Vec::new();
        let mut by_template: HashMap<String, usize> = HashMap::new();
        for controller in controllers {
            let prefix = controller.prefix;
            for operation in controller.operations {
                let template = normalize(&prefix, &operation.path);
                let segments = parse_segments(&template);
                let entry = RouteEntry {
                    template: template.clone(),
                    segments,
                    operation: Arc::new(operation),
                };
                match by_template.get(&template) {
                    Some(&idx) => {
                        warn!(template = %template, "Duplicate route template replaced");
                        entries[idx] = entry;
                    }
                    None => {
                        by_template.insert(template, entries.len());
                        entries.push(entry);
                    }
                }
            }
        }
        info!(route_count = entries.len(), "Route table built");
        Self { entries }
    }

    /// Iterates the compiled entries in table order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Matches `path` against the table, capturing path variables.
    ///
    /// A leading `/` is stripped before splitting; the first entry whose
    /// segments all match wins.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        let request: Vec<&str> = path.strip_prefix('/').unwrap_or(path).split('/').collect();
        for entry in &self.entries {
            if entry.segments.len() != request.len() {
                continue;
            }
            let mut params = ParamVec::new();
            let mut matched = true;
            for (segment, actual) in entry.segments.iter().zip(request.iter()) {
                match segment {
                    Segment::Literal(literal) => {
                        if literal != actual {
                            matched = false;
                            break;
                        }
                    }
                    Segment::Variable(name) => {
                        params.push((Arc::clone(name), (*actual).to_string()));
                    }
                }
            }
            if matched {
                debug!(template = %entry.template, path = %path, "Route matched");
                return Some(RouteMatch {
                    operation: Arc::clone(&entry.operation),
                    path_params: params,
                });
            }
        }
        debug!(path = %path, "No route matched");
        None
    }
}

/// Joins a controller prefix and operation suffix into a normalized
/// template: no leading or trailing separator, no empty segments.
pub(crate) fn normalize(prefix: &str, suffix: &str) -> String {
    format!("{prefix}/{suffix}")
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Splits a normalized template into literal and `{name}` variable
/// segments.
pub(crate) fn parse_segments(template: &str) -> Vec<Segment> {
    template
        .split('/')
        .map(|segment| {
            if let Some(name) = segment.strip_prefix('{') {
                Segment::Variable(Arc::from(name.strip_suffix('}').unwrap_or(name)))
            } else {
                Segment::Literal(segment.to_string())
            }
        })
        .collect()
}
