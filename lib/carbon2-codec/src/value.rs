/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use memchr::memchr;

use carbon2_types::FieldValue;

/// Parse the value token of a line.
///
/// The wire text has no type marker, so a token with a decimal point is a
/// float and anything else has to be a signed integer.
pub(crate) fn parse_value(s: &str) -> anyhow::Result<FieldValue> {
    let s = s.trim();
    if s.is_empty() {
        return Err(anyhow!("empty string"));
    }

    match memchr(b'.', s.as_bytes()) {
        Some(_) => {
            let f = f64::from_str(s).map_err(|e| anyhow!("invalid f64 string: {e}"))?;
            Ok(FieldValue::Float(f))
        }
        None => {
            let i = i64::from_str(s).map_err(|e| anyhow!("invalid i64 string: {e}"))?;
            Ok(FieldValue::Integer(i))
        }
    }
}

/// Parse the trailing timestamp token, in whole seconds since the epoch.
pub(crate) fn parse_timestamp(s: &str) -> anyhow::Result<DateTime<Utc>> {
    let s = s.trim();
    let secs = i64::from_str(s).map_err(|e| anyhow!("invalid i64 string: {e}"))?;
    DateTime::from_timestamp(secs, 0).ok_or_else(|| anyhow!("out of range timestamp {secs}"))
}

/// A field value that has a Carbon2 textual form.
pub(crate) struct Carbon2Value<'a>(&'a FieldValue);

impl<'a> Carbon2Value<'a> {
    /// Strings and non-finite floats can not be written.
    pub(crate) fn new(value: &'a FieldValue) -> Option<Self> {
        match value {
            FieldValue::Integer(_) | FieldValue::Boolean(_) => Some(Carbon2Value(value)),
            FieldValue::Float(f) if f.is_finite() => Some(Carbon2Value(value)),
            FieldValue::Float(_) | FieldValue::String(_) => None,
        }
    }

    pub(crate) fn write_to(&self, buf: &mut Vec<u8>) {
        match self.0 {
            FieldValue::Integer(i) => {
                let mut b = itoa::Buffer::new();
                buf.extend_from_slice(b.format(*i).as_bytes());
            }
            FieldValue::Float(f) => write_f64(buf, *f),
            FieldValue::Boolean(true) => buf.push(b'1'),
            FieldValue::Boolean(false) => buf.push(b'0'),
            FieldValue::String(_) => {}
        }
    }
}

fn write_f64(buf: &mut Vec<u8>, f: f64) {
    let mut b = ryu::Buffer::new();
    let s = b.format_finite(f).as_bytes();
    // keep a decimal point in the exponent form, or it reads back as integer
    match memchr(b'e', s) {
        Some(p) if memchr(b'.', &s[..p]).is_none() => {
            buf.extend_from_slice(&s[..p]);
            buf.extend_from_slice(b".0");
            buf.extend_from_slice(&s[p..]);
        }
        _ => buf.extend_from_slice(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(v: FieldValue) -> Option<String> {
        let value = Carbon2Value::new(&v)?;
        let mut buf = Vec::new();
        value.write_to(&mut buf);
        Some(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn parse_number() {
        assert_eq!(parse_value("0.00").unwrap(), FieldValue::Float(0.0));
        assert_eq!(
            parse_value("1073741824").unwrap(),
            FieldValue::Integer(1073741824)
        );
        assert_eq!(parse_value("-12").unwrap(), FieldValue::Integer(-12));
        assert_eq!(parse_value("-0.5").unwrap(), FieldValue::Float(-0.5));
        assert_eq!(parse_value("1.5e3").unwrap(), FieldValue::Float(1500.0));
        assert_eq!(parse_value("7\r").unwrap(), FieldValue::Integer(7));
    }

    #[test]
    fn parse_number_err() {
        assert!(parse_value("").is_err());
        assert!(parse_value("abc").is_err());
        assert!(parse_value("1.2.3").is_err());
        // no decimal point means integer, exponent form included
        assert!(parse_value("1e3").is_err());
        assert!(parse_value("NaN").is_err());
        assert!(parse_value("9223372036854775808").is_err());
    }

    #[test]
    fn parse_time() {
        let t = parse_timestamp("1625855958\n").unwrap();
        assert_eq!(t.timestamp(), 1625855958);

        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("1625855958.5").is_err());
        assert!(parse_timestamp("now").is_err());
        assert!(parse_timestamp("9223372036854775807").is_err());
    }

    #[test]
    fn write_value() {
        assert_eq!(written(FieldValue::Integer(-3)).unwrap(), "-3");
        assert_eq!(written(FieldValue::Float(0.0)).unwrap(), "0.0");
        assert_eq!(written(FieldValue::Float(91.5)).unwrap(), "91.5");
        assert_eq!(written(FieldValue::Float(1e21)).unwrap(), "1.0e21");
        assert_eq!(written(FieldValue::Float(-1e-7)).unwrap(), "-1.0e-7");
        assert_eq!(written(FieldValue::Float(1.5e-7)).unwrap(), "1.5e-7");
        assert_eq!(written(FieldValue::Boolean(true)).unwrap(), "1");
        assert_eq!(written(FieldValue::Boolean(false)).unwrap(), "0");
    }

    #[test]
    fn write_value_skipped() {
        assert!(written(FieldValue::String("x".to_string())).is_none());
        assert!(written(FieldValue::Float(f64::NAN)).is_none());
        assert!(written(FieldValue::Float(f64::INFINITY)).is_none());
    }

    #[test]
    fn float_exponent_read_back() {
        let s = written(FieldValue::Float(1e21)).unwrap();
        assert_eq!(parse_value(&s).unwrap(), FieldValue::Float(1e21));
    }
}
