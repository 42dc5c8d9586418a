/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod field;
pub use field::{FieldValue, MetricFieldMap};

mod kind;
pub use kind::MetricKind;

mod tag;
pub use tag::MetricTagMap;

mod metric;
pub use metric::Metric;

mod codec;
pub use codec::{MetricDecoder, MetricEncoder};
