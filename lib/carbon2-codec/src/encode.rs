/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

use log::trace;

use carbon2_types::{Metric, MetricEncoder};

use crate::value::Carbon2Value;
use crate::{Carbon2ConfigError, Carbon2Mode, EMPTY_TAG_VALUE, TAG_FIELD, TAG_METRIC};

/// Encoder of Carbon2 text, one line per numeric or boolean field.
///
/// The mode may be changed at any time by [`Carbon2Encoder::set_mode`];
/// every metric is encoded under the mode read when its encoding starts.
#[derive(Debug, Default)]
pub struct Carbon2Encoder {
    mode: RwLock<Carbon2Mode>,
}

impl Carbon2Encoder {
    /// Create an encoder from the configured mode name.
    pub fn new(mode: &str) -> Result<Self, Carbon2ConfigError> {
        let mode = Carbon2Mode::from_str(mode)?;
        Ok(Carbon2Encoder::with_mode(mode))
    }

    pub fn with_mode(mode: Carbon2Mode) -> Self {
        Carbon2Encoder {
            mode: RwLock::new(mode),
        }
    }

    pub fn set_mode(&self, mode: Carbon2Mode) {
        *self.mode.write().unwrap_or_else(PoisonError::into_inner) = mode;
    }

    pub fn mode(&self) -> Carbon2Mode {
        *self.mode.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_mode_unset(&self) -> bool {
        self.mode() == Carbon2Mode::Unset
    }

    pub fn encode(&self, metric: &Metric) -> Vec<u8> {
        MetricEncoder::encode(self, metric)
    }

    pub fn encode_batch(&self, metrics: &[Metric]) -> Vec<u8> {
        MetricEncoder::encode_batch(self, metrics)
    }

    fn write_metric(&self, mode: Carbon2Mode, metric: &Metric, buf: &mut Vec<u8>) {
        for (field_name, field_value) in metric.fields() {
            let Some(value) = Carbon2Value::new(field_value) else {
                trace!(
                    "skip field {field_name} of metric {}: no carbon2 form for {field_value:?}",
                    metric.name()
                );
                continue;
            };

            match mode {
                // decoded records keep their value under the empty key
                _ if field_name.is_empty() => write_tag(buf, TAG_METRIC, metric.name()),
                Carbon2Mode::Unset | Carbon2Mode::FieldSeparate => {
                    write_tag(buf, TAG_METRIC, metric.name());
                    write_tag(buf, TAG_FIELD, field_name);
                }
                Carbon2Mode::MetricIncludesField => {
                    buf.extend_from_slice(TAG_METRIC.as_bytes());
                    buf.push(b'=');
                    write_replace_space(buf, metric.name());
                    buf.push(b'_');
                    write_replace_space(buf, field_name);
                    buf.push(b' ');
                }
            }

            for (key, value) in metric.tag_list() {
                if value.is_empty() {
                    write_tag(buf, key, EMPTY_TAG_VALUE);
                } else {
                    write_tag(buf, key, value);
                }
            }

            buf.push(b' ');
            value.write_to(buf);
            buf.push(b' ');
            let mut ts = itoa::Buffer::new();
            buf.extend_from_slice(ts.format(metric.timestamp()).as_bytes());
            buf.push(b'\n');
        }
    }
}

impl MetricEncoder for Carbon2Encoder {
    fn encode_to(&self, metric: &Metric, buf: &mut Vec<u8>) {
        let mode = self.mode();
        self.write_metric(mode, metric, buf);
    }
}

fn write_tag(buf: &mut Vec<u8>, key: &str, value: &str) {
    write_replace_space(buf, key);
    buf.push(b'=');
    write_replace_space(buf, value);
    buf.push(b' ');
}

fn write_replace_space(buf: &mut Vec<u8>, s: &str) {
    buf.extend(s.bytes().map(|b| if b == b' ' { b'_' } else { b }));
}
