/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use log::debug;
use memchr::memchr;

use carbon2_types::{Metric, MetricDecoder, MetricTagMap};

use crate::Carbon2ParseError;

mod line;
use line::LineParser;

/// Decoder of Carbon2 text.
///
/// It holds no state, so one value may be shared by any number of callers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Carbon2Decoder {}

impl Carbon2Decoder {
    pub fn new() -> Self {
        Carbon2Decoder {}
    }

    /// Decode a newline separated buffer, in input order.
    ///
    /// The first malformed line fails the whole buffer.
    pub fn decode(&self, buf: &[u8]) -> Result<Vec<Metric>, Carbon2ParseError> {
        // tolerate producers that prepend a separator
        let buf = buf.strip_prefix(b"\n").unwrap_or(buf);

        let mut metrics = Vec::new();
        for line in LineVisitor::new(buf) {
            let m = LineParser::new(line).parse().inspect_err(|e| {
                debug!("failed to decode carbon2 buffer: {e}");
            })?;
            metrics.push(m);
        }
        Ok(metrics)
    }

    /// Decode one line, with an optional trailing newline.
    pub fn decode_line(&self, line: &str) -> Result<Metric, Carbon2ParseError> {
        let s = line.strip_suffix('\n').unwrap_or(line);
        if memchr(b'\n', s.as_bytes()).is_some() {
            return Err(Carbon2ParseError::NotSingleLine {
                line: line.to_string(),
            });
        }
        LineParser::new(s.as_bytes()).parse()
    }
}

impl MetricDecoder for Carbon2Decoder {
    type Error = Carbon2ParseError;

    fn decode(&self, buf: &[u8]) -> Result<Vec<Metric>, Self::Error> {
        Carbon2Decoder::decode(self, buf)
    }

    fn decode_line(&self, line: &str) -> Result<Metric, Self::Error> {
        Carbon2Decoder::decode_line(self, line)
    }

    /// Carbon2 lines carry all of their tags, default tags are not applied.
    fn set_default_tags(&mut self, _tags: MetricTagMap) {}
}

struct LineVisitor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> LineVisitor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        LineVisitor { buf, offset: 0 }
    }
}

impl<'a> Iterator for LineVisitor<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.buf.len() {
            return None;
        }

        let left = &self.buf[self.offset..];
        match memchr(b'\n', left) {
            Some(p) => {
                self.offset += p + 1;
                Some(&left[..p])
            }
            None => {
                self.offset = self.buf.len();
                Some(left)
            }
        }
    }
}
