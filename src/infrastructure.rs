//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - Hand-off to the platform mail handler

pub mod cli;
pub mod config;
pub mod mail_handler;
pub mod tui;
