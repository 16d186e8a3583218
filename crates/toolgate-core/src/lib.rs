pub mod error;
pub mod registry;
pub mod schema;
pub mod tool;

pub use error::Error;
pub use registry::{ToolDescriptor, ToolRegistry};
pub use schema::{FieldError, ValidationError};
pub use tool::{FnTool, Tool, ToolError};
