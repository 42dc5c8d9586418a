/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint, value_parser};
use log::{debug, info, warn};

use carbon2_codec::{
    Carbon2Decoder, Carbon2EncoderConfig, Carbon2Mode, DECODED_FIELD_KEY, TAG_FIELD,
};
use carbon2_types::{Metric, MetricFieldMap};

use crate::ProcArgs;
use crate::input;

pub const COMMAND: &str = "convert";

const ARG_MODE: &str = "mode";
const ARG_CONFIG: &str = "config";
const ARG_LENIENT: &str = "lenient";

pub fn command() -> Command {
    input::append_input_arg(
        Command::new(COMMAND)
            .about("Decode carbon2 input and encode it again to stdout")
            .arg(
                Arg::new(ARG_MODE)
                    .help("Output format, override the one in config file")
                    .long(ARG_MODE)
                    .value_name("MODE")
                    .num_args(1)
                    .value_parser(value_parser!(Carbon2Mode)),
            )
            .arg(
                Arg::new(ARG_CONFIG)
                    .help("Encoder config file in yaml format")
                    .long(ARG_CONFIG)
                    .short('c')
                    .value_name("CONFIG FILE")
                    .num_args(1)
                    .value_hint(ValueHint::FilePath)
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new(ARG_LENIENT)
                    .help("Skip malformed lines instead of failing")
                    .long(ARG_LENIENT)
                    .action(ArgAction::SetTrue),
            ),
    )
}

pub fn run(_proc_args: &ProcArgs, args: &ArgMatches) -> anyhow::Result<ExitCode> {
    let mut config = if let Some(path) = args.get_one::<PathBuf>(ARG_CONFIG) {
        input::load_encoder_config(path)?
    } else {
        Carbon2EncoderConfig::default()
    };
    if let Some(mode) = args.get_one::<Carbon2Mode>(ARG_MODE) {
        config.set_mode(*mode);
    }
    let encoder = config.build();
    if encoder.is_mode_unset() {
        debug!("no carbon2 format set, will use {}", Carbon2Mode::FieldSeparate);
    }

    let buf = input::read_input(args)?;
    let decoder = Carbon2Decoder::new();
    let metrics = if args.get_flag(ARG_LENIENT) {
        decode_lenient(&decoder, &buf)
    } else {
        decoder.decode(&buf)?
    };
    info!("decoded {} records", metrics.len());

    let metrics: Vec<Metric> = metrics.into_iter().map(restore_field).collect();
    let out = encoder.encode_batch(&metrics);

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&out)
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(ExitCode::SUCCESS)
}

fn decode_lenient(decoder: &Carbon2Decoder, buf: &[u8]) -> Vec<Metric> {
    let mut metrics = Vec::new();
    for (i, line) in buf.split(|b| *b == b'\n').enumerate() {
        if line.is_empty() {
            continue;
        }
        let line_number = i + 1;
        let Ok(line) = std::str::from_utf8(line) else {
            warn!("skip line {line_number}: invalid utf-8");
            continue;
        };
        match decoder.decode_line(line) {
            Ok(m) => metrics.push(m),
            Err(e) => warn!("skip line {line_number}: {e}"),
        }
    }
    metrics
}

/// Move the `field` tag back to be the field name, so the record encodes
/// to the same line it was decoded from.
fn restore_field(metric: Metric) -> Metric {
    let mut tags = metric.tags().clone();
    let Some(field_name) = tags.remove(TAG_FIELD) else {
        return metric;
    };

    let mut fields = MetricFieldMap::with_capacity(1);
    if let Some(v) = metric.field(DECODED_FIELD_KEY) {
        fields.insert(field_name, v.clone());
    }
    Metric::new(metric.name(), tags, fields, *metric.time(), metric.kind())
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbon2_codec::Carbon2Encoder;
    use carbon2_types::FieldValue;

    #[test]
    fn lenient() {
        let decoder = Carbon2Decoder::new();
        let buf = b"\nmetric=a  1 1\nmetric=b  x 2\n\xff\xfe  3 3\n\nmetric=c  4 4";
        let metrics = decode_lenient(&decoder, buf);
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].name(), "a");
        assert_eq!(metrics[1].name(), "c");
    }

    #[test]
    fn field_separate_unchanged() {
        let line = "metric=cpu field=usage_idle cpu=cpu0 host=server01  91.5 1625855958\n";
        let m = Carbon2Decoder::new().decode_line(line).unwrap();
        let m = restore_field(m);
        assert!(!m.tags().contains_key(TAG_FIELD));

        let encoder = Carbon2Encoder::with_mode(Carbon2Mode::FieldSeparate);
        assert_eq!(encoder.encode(&m), line.as_bytes());

        let encoder = Carbon2Encoder::with_mode(Carbon2Mode::MetricIncludesField);
        assert_eq!(
            encoder.encode(&m),
            b"metric=cpu_usage_idle cpu=cpu0 host=server01  91.5 1625855958\n"
        );
    }

    #[test]
    fn without_field_tag() {
        let line = "metric=cpu host=a  7 1\n";
        let m = Carbon2Decoder::new().decode_line(line).unwrap();
        let m = restore_field(m);
        assert_eq!(m.field(DECODED_FIELD_KEY), Some(&FieldValue::Integer(7)));

        for mode in [Carbon2Mode::FieldSeparate, Carbon2Mode::MetricIncludesField] {
            let encoder = Carbon2Encoder::with_mode(mode);
            assert_eq!(encoder.encode(&m), line.as_bytes());
        }
    }
}
