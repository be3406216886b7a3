// pods-rs: Pod manager for qmake projects
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config (pods.toml, --config, PODS_*, flags)
//!              --> Logging --> Command Dispatch
//!   Init | Install | Remove | Update | List | Available | Check | Generate
//! ```

use std::process::ExitCode;

use pods_rs::cli::global::GlobalOptions;
use pods_rs::cli::{self, Command};
use pods_rs::cmd::config::{run_config_files_command, run_options_command};
use pods_rs::cmd::list::{run_available_command, run_list_command};
use pods_rs::cmd::pods::{
    run_check_command, run_generate_command, run_init_command, run_install_command,
    run_remove_command, run_update_command,
};
use pods_rs::config::Config;
use pods_rs::config::loader::ConfigLoader;
use pods_rs::logging::init_logging;
use pods_rs::logging::LogConfig;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let config_files = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &config_files).await
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config, config_files: &[String]) -> ExitCode {
    let repo = cli.global.repository.as_path();

    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::ConfigFiles) => {
            run_config_files_command(config_files);
            Ok(())
        }
        Some(Command::Init) => run_init_command(config, repo),
        Some(Command::Install(args)) => run_install_command(args, config, repo).await,
        Some(Command::Remove(args)) => run_remove_command(args, config, repo),
        Some(Command::Update(args)) => run_update_command(args, config, repo),
        Some(Command::List) => run_list_command(config, repo),
        Some(Command::Available(args)) => run_available_command(args, config).await,
        Some(Command::Check(args)) => run_check_command(args, config, repo),
        Some(Command::Generate) => run_generate_command(config, repo),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> pods_rs::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional("pods.toml");
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    global.apply_overrides(loader.with_env_prefix("PODS"))
}
