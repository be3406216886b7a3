// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          init / install / list
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!                      pod::manager
//!                            |
//!        +----------+--------+--------+----------+
//!        v          v                 v          v
//!    manifest     qmake             index       git
//!  .gitmodules  pods.pri          JSON via    gix/CLI
//!   .podinfo   pods-subdirs.pri     net
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod net;
pub mod pod;
