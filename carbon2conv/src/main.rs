/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::process::ExitCode;

use anyhow::{Context, anyhow};
use clap::{Arg, ArgMatches, Command, value_parser};
use clap_complete::Shell;

const COMMAND_VERSION: &str = "version";
const COMMAND_COMPLETION: &str = "completion";

fn build_cli_args() -> Command {
    carbon2conv::add_global_args(Command::new(carbon2conv::build::PKG_NAME))
        .subcommand_required(true)
        .subcommand_value_name("TARGET")
        .subcommand(Command::new(COMMAND_VERSION).override_help("Show version"))
        .subcommand(
            Command::new(COMMAND_COMPLETION).arg(
                Arg::new("target")
                    .value_name("SHELL")
                    .required(true)
                    .num_args(1)
                    .value_parser(value_parser!(Shell)),
            ),
        )
        .subcommand(carbon2conv::target::check::command())
        .subcommand(carbon2conv::target::convert::command())
}

fn main() -> anyhow::Result<ExitCode> {
    let args = build_cli_args().get_matches();
    let proc_args = carbon2conv::parse_global_args(&args)?;

    let (subcommand, sub_args) = args
        .subcommand()
        .ok_or_else(|| anyhow!("no subcommand found"))?;

    match subcommand {
        COMMAND_VERSION => {
            carbon2conv::build::print_version(proc_args.verbose_level());
            return Ok(ExitCode::SUCCESS);
        }
        COMMAND_COMPLETION => {
            generate_completion(sub_args);
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    let _log_guard =
        carbon2conv::setup_log(proc_args.log_level()).context("failed to setup logger")?;

    match subcommand {
        carbon2conv::target::check::COMMAND => {
            carbon2conv::target::check::run(&proc_args, sub_args)
        }
        carbon2conv::target::convert::COMMAND => {
            carbon2conv::target::convert::run(&proc_args, sub_args)
        }
        cmd => Err(anyhow!("invalid subcommand {}", cmd)),
    }
}

fn generate_completion(args: &ArgMatches) {
    if let Some(target) = args.get_one::<Shell>("target") {
        let mut app = build_cli_args();
        let bin_name = app.get_name().to_string();
        clap_complete::generate(*target, &mut app, bin_name, &mut io::stdout());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_args() {
        build_cli_args().debug_assert();
    }
}
