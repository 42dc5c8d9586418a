/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::process::ExitCode;

use clap::{ArgMatches, Command};
use log::{debug, error};

use carbon2_codec::Carbon2Decoder;

use crate::ProcArgs;
use crate::input;

pub const COMMAND: &str = "check";

pub fn command() -> Command {
    input::append_input_arg(
        Command::new(COMMAND).about("Decode carbon2 input and print the number of records"),
    )
}

pub fn run(_proc_args: &ProcArgs, args: &ArgMatches) -> anyhow::Result<ExitCode> {
    let buf = input::read_input(args)?;
    debug!("read {} bytes of input", buf.len());

    match Carbon2Decoder::new().decode(&buf) {
        Ok(metrics) => {
            println!("{}", metrics.len());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
