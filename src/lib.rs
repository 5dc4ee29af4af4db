pub mod auth;
pub mod mcp;
pub mod ticktick;
