pub mod dispatcher;
pub mod jsonrpc;

pub use dispatcher::Dispatcher;
pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
