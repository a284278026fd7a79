//! AutoDeploy - Terminal Deployment Dashboard
//!
//! A cosmetic terminal dashboard that simulates a deployment workflow:
//! commands are matched against literal strings and "deploy" plays back
//! a fixed sequence of timed log messages. Nothing is actually built or
//! deployed; everything is session-local.

pub mod command;
pub mod core;
pub mod session;
pub mod timeline;
pub mod ui;
