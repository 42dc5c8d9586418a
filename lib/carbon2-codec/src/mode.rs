/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use crate::Carbon2ConfigError;

/// How the encoder combines the metric name and the field name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Carbon2Mode {
    /// Nothing configured, encodes as [`Carbon2Mode::FieldSeparate`].
    #[default]
    Unset,
    /// `metric=<name> field=<field>`
    FieldSeparate,
    /// `metric=<name>_<field>`
    MetricIncludesField,
}

impl Carbon2Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Carbon2Mode::Unset => "",
            Carbon2Mode::FieldSeparate => "field_separate",
            Carbon2Mode::MetricIncludesField => "metric_includes_field",
        }
    }
}

impl FromStr for Carbon2Mode {
    type Err = Carbon2ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Carbon2Mode::Unset),
            "field_separate" => Ok(Carbon2Mode::FieldSeparate),
            "metric_includes_field" => Ok(Carbon2Mode::MetricIncludesField),
            _ => Err(Carbon2ConfigError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Carbon2Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Carbon2Mode::from_str("").unwrap(), Carbon2Mode::Unset);
        assert_eq!(
            Carbon2Mode::from_str("field_separate").unwrap(),
            Carbon2Mode::FieldSeparate
        );
        assert_eq!(
            Carbon2Mode::from_str("metric_includes_field").unwrap(),
            Carbon2Mode::MetricIncludesField
        );

        let e = Carbon2Mode::from_str("Field_Separate").unwrap_err();
        assert_eq!(e.to_string(), "unknown carbon2 format: Field_Separate");
        assert!(Carbon2Mode::from_str("graphite").is_err());
    }

    #[test]
    fn display() {
        for mode in [
            Carbon2Mode::Unset,
            Carbon2Mode::FieldSeparate,
            Carbon2Mode::MetricIncludesField,
        ] {
            assert_eq!(Carbon2Mode::from_str(&mode.to_string()).unwrap(), mode);
        }
    }
}
