//! GNews MCP gateway: exposes the GNews v4 API over the Model Context
//! Protocol (two tools, three reference resources, one prompt).

pub mod catalog;
pub mod cli;
pub mod clients;
pub mod domain;
pub mod infra;
pub mod tools;
