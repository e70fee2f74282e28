pub mod api;
pub mod config;
pub mod rpc;
pub mod types;

pub use api::{
    AgentInfo, Capability, CheckRequest, DiagnoseRequest, DiagnoseResponse, FixRequest,
    FixResponse, StatusResponse, capabilities,
};
pub use config::ServerConfig;
pub use rpc::{RpcError, RpcRequest, RpcResponse, error_codes};
pub use types::*;
