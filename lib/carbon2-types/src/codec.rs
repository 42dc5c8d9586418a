/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use crate::{Metric, MetricTagMap};

/// Text to metric conversion, shared by all codecs of the host plugin family.
pub trait MetricDecoder {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Decode a newline separated buffer. Must be safe to call concurrently.
    fn decode(&self, buf: &[u8]) -> Result<Vec<Metric>, Self::Error>;

    /// Decode exactly one line.
    fn decode_line(&self, line: &str) -> Result<Metric, Self::Error>;

    /// Tags to be added to every decoded metric.
    ///
    /// Codecs that carry their own tag set on the wire may ignore this.
    fn set_default_tags(&mut self, tags: MetricTagMap);
}

/// Metric to text conversion, shared by all codecs of the host plugin family.
pub trait MetricEncoder {
    /// Append the encoding of `metric` to `buf`.
    fn encode_to(&self, metric: &Metric, buf: &mut Vec<u8>);

    fn encode(&self, metric: &Metric) -> Vec<u8> {
        let mut buf = Vec::with_capacity(256);
        self.encode_to(metric, &mut buf);
        buf
    }

    fn encode_batch(&self, metrics: &[Metric]) -> Vec<u8> {
        let mut buf = Vec::with_capacity(256 * metrics.len());
        for metric in metrics {
            self.encode_to(metric, &mut buf);
        }
        buf
    }
}
