/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::anyhow;
use memchr::memchr;

use carbon2_types::{Metric, MetricFieldMap, MetricKind, MetricTagMap};

use crate::value::{parse_timestamp, parse_value};
use crate::{Carbon2ParseError, DECODED_FIELD_KEY, TAG_METRIC};

pub(super) struct LineParser<'a> {
    raw: &'a [u8],
}

impl<'a> LineParser<'a> {
    pub(super) fn new(raw: &'a [u8]) -> Self {
        LineParser { raw }
    }

    pub(super) fn parse(self) -> Result<Metric, Carbon2ParseError> {
        let line = std::str::from_utf8(self.raw).map_err(|_| Carbon2ParseError::InvalidUtf8 {
            line: String::from_utf8_lossy(self.raw).into_owned(),
        })?;

        let mut name: Option<&str> = None;
        let mut tags = MetricTagMap::with_capacity(8);
        let mut value = None;
        let mut time = None;

        for token in line.split(' ') {
            // the blank gap before the value
            if token.is_empty() {
                continue;
            }

            match memchr(b'=', token.as_bytes()) {
                Some(p) => {
                    let key = &token[..p];
                    let v = token[p + 1..].trim();
                    if key == TAG_METRIC {
                        name = Some(v);
                    } else {
                        tags.insert(key, v);
                    }
                }
                None if value.is_none() => {
                    let v = parse_value(token).map_err(|reason| {
                        Carbon2ParseError::InvalidValue {
                            line: line.to_string(),
                            reason,
                        }
                    })?;
                    value = Some(v);
                }
                None => {
                    let t = parse_timestamp(token).map_err(|reason| {
                        Carbon2ParseError::InvalidTimestamp {
                            line: line.to_string(),
                            reason,
                        }
                    })?;
                    time = Some(t);
                    break;
                }
            }
        }

        let Some(value) = value else {
            return Err(Carbon2ParseError::InvalidValue {
                line: line.to_string(),
                reason: anyhow!("no value field"),
            });
        };
        let Some(time) = time else {
            return Err(Carbon2ParseError::InvalidTimestamp {
                line: line.to_string(),
                reason: anyhow!("no timestamp field"),
            });
        };
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            return Err(Carbon2ParseError::MissingMetric {
                line: line.to_string(),
            });
        };

        let mut fields = MetricFieldMap::with_capacity(1);
        fields.insert(DECODED_FIELD_KEY.to_string(), value);
        Ok(Metric::new(name, tags, fields, time, MetricKind::Gauge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbon2_types::FieldValue;

    #[test]
    fn tokens() {
        let m = LineParser::new(b"host=a metric=cpu field=idle  91.5 1625855958")
            .parse()
            .unwrap();
        assert_eq!(m.name(), "cpu");
        assert_eq!(m.tags().get("host"), Some("a"));
        assert_eq!(m.tags().get("field"), Some("idle"));
        assert_eq!(m.tags().len(), 2);
        assert_eq!(m.field(""), Some(&FieldValue::Float(91.5)));
        assert_eq!(m.fields().len(), 1);
        assert_eq!(m.timestamp(), 1625855958);
        assert_eq!(m.kind(), MetricKind::Gauge);
    }

    #[test]
    fn split_at_first_equal_sign() {
        let m = LineParser::new(b"metric=cpu q=a=b  1 2").parse().unwrap();
        assert_eq!(m.tags().get("q"), Some("a=b"));
    }

    #[test]
    fn duplicate_tag() {
        let m = LineParser::new(b"metric=cpu host=a host=b  1 2")
            .parse()
            .unwrap();
        assert_eq!(m.tags().get("host"), Some("b"));
        assert_eq!(m.tags().len(), 1);
    }

    #[test]
    fn empty_tag_value() {
        let m = LineParser::new(b"metric=cpu host=  1 2").parse().unwrap();
        assert_eq!(m.tags().get("host"), Some(""));
    }

    #[test]
    fn stop_after_timestamp() {
        let m = LineParser::new(b"metric=cpu  1 2 extra=tag garbage ")
            .parse()
            .unwrap();
        assert!(m.tags().is_empty());
        assert_eq!(m.timestamp(), 2);
    }

    #[test]
    fn tags_between_value_and_timestamp() {
        let m = LineParser::new(b"metric=cpu  1 host=a 2").parse().unwrap();
        assert_eq!(m.tags().get("host"), Some("a"));
        assert_eq!(m.timestamp(), 2);
    }

    #[test]
    fn carriage_return() {
        let m = LineParser::new(b"metric=cpu  1 1625855958\r").parse().unwrap();
        assert_eq!(m.timestamp(), 1625855958);
    }

    #[test]
    fn errors() {
        let e = LineParser::new(b"host=a  1 2").parse().unwrap_err();
        assert!(matches!(e, Carbon2ParseError::MissingMetric { .. }));
        assert_eq!(e.line(), "host=a  1 2");

        let e = LineParser::new(b"metric=  1 2").parse().unwrap_err();
        assert!(matches!(e, Carbon2ParseError::MissingMetric { .. }));

        let e = LineParser::new(b"metric=cpu  x 2").parse().unwrap_err();
        assert!(matches!(e, Carbon2ParseError::InvalidValue { .. }));

        let e = LineParser::new(b"metric=cpu").parse().unwrap_err();
        assert!(matches!(e, Carbon2ParseError::InvalidValue { .. }));

        let e = LineParser::new(b"").parse().unwrap_err();
        assert!(matches!(e, Carbon2ParseError::InvalidValue { .. }));

        let e = LineParser::new(b"metric=cpu  1 yesterday").parse().unwrap_err();
        assert!(matches!(e, Carbon2ParseError::InvalidTimestamp { .. }));

        let e = LineParser::new(b"metric=cpu  1").parse().unwrap_err();
        assert!(matches!(e, Carbon2ParseError::InvalidTimestamp { .. }));

        // value errors are found before the metric tag check
        let e = LineParser::new(b"host=a  x 2").parse().unwrap_err();
        assert!(matches!(e, Carbon2ParseError::InvalidValue { .. }));

        let e = LineParser::new(b"metric=\xff  1 2").parse().unwrap_err();
        assert!(matches!(e, Carbon2ParseError::InvalidUtf8 { .. }));
    }
}
