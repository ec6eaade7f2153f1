//! Direct blockchain reading for EVM pools

pub mod contracts;
pub mod rpc_client;

pub use rpc_client::EvmRpcClient;
