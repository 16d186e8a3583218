mod generate;
mod pages;
mod rpc;

pub use generate::generate;
pub use pages::{auth_probe, health, index};
pub use rpc::rpc;
