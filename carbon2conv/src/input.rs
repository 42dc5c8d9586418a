/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use clap::{Arg, ArgMatches, Command, ValueHint, value_parser};
use yaml_rust::YamlLoader;

use carbon2_codec::Carbon2EncoderConfig;

const ARG_INPUT: &str = "input";

pub(crate) fn append_input_arg(cmd: Command) -> Command {
    cmd.arg(
        Arg::new(ARG_INPUT)
            .help("Input file, stdin will be used if not set")
            .value_name("FILE")
            .num_args(1)
            .value_hint(ValueHint::FilePath)
            .value_parser(value_parser!(PathBuf)),
    )
}

pub(crate) fn read_input(args: &ArgMatches) -> anyhow::Result<Vec<u8>> {
    if let Some(path) = args.get_one::<PathBuf>(ARG_INPUT) {
        fs::read(path).context(format!("failed to read input file {}", path.display()))
    } else {
        let mut buf = Vec::with_capacity(4096);
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("failed to read from stdin")?;
        Ok(buf)
    }
}

pub(crate) fn load_encoder_config(path: &Path) -> anyhow::Result<Carbon2EncoderConfig> {
    let content = fs::read_to_string(path)
        .context(format!("failed to read config file {}", path.display()))?;
    parse_encoder_config(&content).context(format!("invalid config file {}", path.display()))
}

fn parse_encoder_config(content: &str) -> anyhow::Result<Carbon2EncoderConfig> {
    let docs = YamlLoader::load_from_str(content).map_err(|e| anyhow!("invalid yaml: {e}"))?;
    match docs.first() {
        Some(doc) => Carbon2EncoderConfig::parse_yaml(doc),
        None => Ok(Carbon2EncoderConfig::default()),
    }
}
