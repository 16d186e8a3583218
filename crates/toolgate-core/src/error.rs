/// Configuration errors raised while building the tool registry.
///
/// These are fatal at startup; no request is ever served from a registry
/// that failed construction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("duplicate tool name: {0}")]
    DuplicateTool(String),

    #[error("tool at position {0} has an empty name")]
    UnnamedTool(usize),
}
