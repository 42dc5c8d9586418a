/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use clap::{Arg, ArgAction, ArgMatches, Command};

const GLOBAL_ARG_VERBOSE: &str = "verbose";

#[derive(Default)]
pub struct ProcArgs {
    verbose_level: u8,
}

impl ProcArgs {
    #[inline]
    pub fn verbose_level(&self) -> u8 {
        self.verbose_level
    }

    pub fn log_level(&self) -> log::Level {
        match self.verbose_level {
            0 => log::Level::Warn,
            1 => log::Level::Info,
            2 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

pub fn add_global_args(app: Command) -> Command {
    app.arg(
        Arg::new(GLOBAL_ARG_VERBOSE)
            .help("Show verbose output, repeat to get more")
            .short('v')
            .long(GLOBAL_ARG_VERBOSE)
            .global(true)
            .action(ArgAction::Count),
    )
}

pub fn parse_global_args(args: &ArgMatches) -> anyhow::Result<ProcArgs> {
    let mut proc_args = ProcArgs::default();
    if let Some(n) = args.get_one::<u8>(GLOBAL_ARG_VERBOSE) {
        proc_args.verbose_level = *n;
    }
    Ok(proc_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> ProcArgs {
        let app = add_global_args(Command::new("test"));
        let args = app.try_get_matches_from(argv).unwrap();
        parse_global_args(&args).unwrap()
    }

    #[test]
    fn verbose_level() {
        let proc_args = parse(&["test"]);
        assert_eq!(proc_args.verbose_level(), 0);
        assert_eq!(proc_args.log_level(), log::Level::Warn);

        let proc_args = parse(&["test", "-v"]);
        assert_eq!(proc_args.log_level(), log::Level::Info);

        let proc_args = parse(&["test", "-vv"]);
        assert_eq!(proc_args.log_level(), log::Level::Debug);

        let proc_args = parse(&["test", "-vvvv"]);
        assert_eq!(proc_args.verbose_level(), 4);
        assert_eq!(proc_args.log_level(), log::Level::Trace);
    }
}
