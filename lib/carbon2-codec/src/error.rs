/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

/// Errors returned by the decoder, each naming the offending line.
#[derive(Debug, Error)]
pub enum Carbon2ParseError {
    #[error("metric without 'metric' tag, line: {line}")]
    MissingMetric { line: String },
    #[error("invalid value field, line: {line}, err: {reason}")]
    InvalidValue { line: String, reason: anyhow::Error },
    #[error("invalid timestamp field, line: {line}, err: {reason}")]
    InvalidTimestamp { line: String, reason: anyhow::Error },
    #[error("invalid utf-8 encoding, line: {line}")]
    InvalidUtf8 { line: String },
    #[error("not a single line: {line}")]
    NotSingleLine { line: String },
}

impl Carbon2ParseError {
    pub fn line(&self) -> &str {
        match self {
            Carbon2ParseError::MissingMetric { line }
            | Carbon2ParseError::InvalidValue { line, .. }
            | Carbon2ParseError::InvalidTimestamp { line, .. }
            | Carbon2ParseError::InvalidUtf8 { line }
            | Carbon2ParseError::NotSingleLine { line } => line,
        }
    }
}

#[derive(Debug, Error)]
pub enum Carbon2ConfigError {
    #[error("unknown carbon2 format: {0}")]
    UnknownMode(String),
}
