/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod error;
pub use error::{Carbon2ConfigError, Carbon2ParseError};

mod mode;
pub use mode::Carbon2Mode;

mod value;

mod decode;
pub use decode::Carbon2Decoder;

mod encode;
pub use encode::Carbon2Encoder;

mod config;
pub use config::Carbon2EncoderConfig;

/// The tag holding the metric name.
pub const TAG_METRIC: &str = "metric";
/// The tag holding the field name in [`Carbon2Mode::FieldSeparate`] mode.
pub const TAG_FIELD: &str = "field";
/// The key every decoded value is stored under.
///
/// The field name can not always be recovered from the wire text, so
/// decoded records never try to.
pub const DECODED_FIELD_KEY: &str = "";
/// How empty tag values are written, as the format has no quoting.
pub const EMPTY_TAG_VALUE: &str = "null";
