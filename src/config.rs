// ABOUTME: Configuration and constants for the slisp interpreter

pub const VERSION: &str = "0.1.0";

/// Prompt shown by the interactive loop.
pub const PROMPT: &str = "slisp> ";

/// Readline history file for interactive sessions.
pub const HISTORY_FILE: &str = ".slisp_history";
