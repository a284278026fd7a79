//! Session reducer - classified commands applied to explicit state
//!
//! The session owns the log and the busy flag and is the only place they
//! change. Every time-dependent operation takes `now` explicitly so tests
//! can fabricate instants instead of sleeping.

use crate::command::{classify, Command};
use crate::core::types::LogKind;
use crate::session::log::ConsoleLog;
use crate::timeline::DeployRun;
use std::time::Instant;

const HELP_TEXT: &str = "Available commands: deploy, status, clear, help";

/// One console session: log, busy flag, and the in-flight deploy (if any)
#[derive(Debug)]
pub struct Session {
    log: ConsoleLog,
    deploy: Option<DeployRun>,
}

impl Session {
    /// New session with the boot banner entries
    pub fn new() -> Self {
        let mut log = ConsoleLog::new();
        log.push("AutoDeploy Agent initialized v1.0.0", LogKind::Info);
        log.push("Connected to Vercel Edge Network", LogKind::Success);
        log.push("Waiting for command...", LogKind::Info);
        Self { log, deploy: None }
    }

    /// New session with an empty log (for tests that count entries)
    pub fn bare() -> Self {
        Self {
            log: ConsoleLog::new(),
            deploy: None,
        }
    }

    /// True while a deploy timeline is in flight; gates input
    pub fn deploying(&self) -> bool {
        self.deploy.is_some()
    }

    pub fn log(&self) -> &ConsoleLog {
        &self.log
    }

    /// Submit one line of input at `now`
    ///
    /// Returns true if the submission was accepted (the input line should
    /// be cleared). While deploying, and for empty/whitespace-only input,
    /// nothing changes and false is returned. No outcome is an error to
    /// the caller: everything is a log entry or a silent no-op.
    pub fn submit(&mut self, raw: &str, now: Instant) -> bool {
        if self.deploying() {
            tracing::debug!(input = raw, "submission ignored while deploying");
            return false;
        }

        let command = classify(raw);
        if command == Command::Empty {
            return false;
        }

        // Every accepted command is echoed first, like a shell.
        let trimmed = raw.trim();
        self.log.push(format!("> {trimmed}"), LogKind::Info);

        match command {
            Command::Deploy => {
                tracing::info!("deploy timeline started");
                self.deploy = Some(DeployRun::start(now));
                // The immediate step fires within the same submission.
                self.advance(now);
            }
            Command::Clear => {
                self.log.clear();
            }
            Command::Help => {
                self.log.push(HELP_TEXT, LogKind::Info);
            }
            Command::Unknown(cmd) => {
                self.log.push(format!("Unknown command: {cmd}"), LogKind::Error);
            }
            Command::Empty => unreachable!("handled above"),
        }

        true
    }

    /// Fire every timeline step due by `now`
    ///
    /// Called from the event loop each iteration; steps fire in table
    /// order even if the loop stalled past several offsets. The last step
    /// clears the busy flag.
    pub fn advance(&mut self, now: Instant) {
        let Some(run) = &mut self.deploy else {
            return;
        };

        for step in run.due(now) {
            self.log.push(step.message, step.kind);
        }

        if run.finished() {
            tracing::info!("deploy timeline complete");
            self.deploy = None;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
