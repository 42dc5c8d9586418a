/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt::Arguments;
use std::io::{self, Write};

use chrono::Local;
use slog::{Drain, KV, Level, OwnedKVList, Record, Serializer, slog_o};
use slog_scope::GlobalLoggerGuard;

struct StderrDrain {
    level: Level,
}

impl StderrDrain {
    fn write_plain<IO: Write>(
        &self,
        io: &mut IO,
        record: &Record,
        values: &OwnedKVList,
    ) -> io::Result<()> {
        let datetime = Local::now();
        write!(io, "{}", datetime.format("%Y-%m-%d %H:%M:%S%.6f"))?;
        write!(io, " {}", record.level())?;

        let mut kv_formatter = FormatterKv(&mut *io);
        values.serialize(record, &mut kv_formatter)?;
        record.kv().serialize(record, &mut kv_formatter)?;

        writeln!(io, " {}", record.msg())
    }
}

impl Drain for StderrDrain {
    type Ok = ();
    type Err = io::Error;

    fn log(&self, record: &Record, values: &OwnedKVList) -> io::Result<()> {
        if !record.level().is_at_least(self.level) {
            return Ok(());
        }

        let mut buf: Vec<u8> = Vec::with_capacity(256);
        self.write_plain(&mut buf, record, values)?;

        let mut stderr = io::stderr().lock();
        stderr.write_all(&buf)?;
        stderr.flush()
    }
}

struct FormatterKv<'a, IO: Write>(&'a mut IO);

impl<IO: Write> Serializer for FormatterKv<'_, IO> {
    fn emit_arguments(&mut self, key: slog::Key, value: &Arguments) -> slog::Result {
        write!(self.0, " {key}: {value},")?;
        Ok(())
    }
}

fn to_slog_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Trace,
    }
}

/// Route the `log` facade to a stderr drain filtered at `level`.
pub fn setup_log(level: log::Level) -> Result<GlobalLoggerGuard, log::SetLoggerError> {
    let drain = StderrDrain {
        level: to_slog_level(level),
    };
    let logger = slog::Logger::root(drain.ignore_res(), slog_o!());

    let scope_guard = slog_scope::set_global_logger(logger);

    slog_stdlog::init_with_level(level)?;
    Ok(scope_guard)
}
