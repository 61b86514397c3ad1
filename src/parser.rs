//! Parse hex text (streams, endian values, MAC addresses) using PEST.

use crate::error::{FrameError, Result};
use pest::Parser;
use pest_derive::Parser as PestParser;

#[derive(PestParser)]
#[grammar = "grammar.pest"]
struct HexParser;

/// Endian-value text as recognized by the grammar, before any conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ValueText<'a> {
    Prefixed { prefix: &'a str, digits: &'a str },
    Bare(&'a str),
}

/// Parse a hex stream into its bytes. Separators may be whitespace, `:` or `-`,
/// or absent entirely.
pub fn parse_stream(source: &str) -> Result<Vec<u8>> {
    let pairs = HexParser::parse(Rule::stream, source)
        .map_err(|e| FrameError::MalformedInput(format!("hex stream: {}", e)))?;
    let pair = pairs
        .into_iter()
        .next()
        .ok_or_else(|| FrameError::MalformedInput("empty parse".to_string()))?;
    pair.into_inner()
        .filter(|p| p.as_rule() == Rule::octet)
        .map(|p| octet_value(p.as_str()))
        .collect()
}

/// Parse a MAC address (`aa:bb:cc:dd:ee:ff`, `aa-bb-...` or `aabbccddeeff`).
pub fn parse_mac(source: &str) -> Result<[u8; 6]> {
    let pairs = HexParser::parse(Rule::mac, source)
        .map_err(|e| FrameError::MalformedInput(format!("mac address: {}", e)))?;
    let mut out = [0u8; 6];
    let mut n = 0;
    for p in pairs.flatten().filter(|p| p.as_rule() == Rule::octet) {
        if n == out.len() {
            return Err(FrameError::MalformedInput(format!("mac address: {}", source)));
        }
        out[n] = octet_value(p.as_str())?;
        n += 1;
    }
    if n != out.len() {
        return Err(FrameError::MalformedInput(format!("mac address: {}", source)));
    }
    Ok(out)
}

pub(crate) fn parse_value_text(source: &str) -> Result<ValueText<'_>> {
    let pairs = HexParser::parse(Rule::endian_value, source)
        .map_err(|e| FrameError::ShapeMismatch(format!("{:?}: {}", source, e)))?;
    for p in pairs.flatten() {
        match p.as_rule() {
            Rule::prefixed_value => {
                let mut inner = p.into_inner();
                let prefix = inner
                    .next()
                    .ok_or_else(|| FrameError::ShapeMismatch("prefixed value: prefix".to_string()))?;
                let digits = inner
                    .next()
                    .ok_or_else(|| FrameError::ShapeMismatch("prefixed value: digits".to_string()))?;
                return Ok(ValueText::Prefixed {
                    prefix: prefix.as_str(),
                    digits: digits.as_str(),
                });
            }
            Rule::bare_value => return Ok(ValueText::Bare(p.as_str())),
            _ => {}
        }
    }
    Err(FrameError::ShapeMismatch(format!("{:?}", source)))
}

fn octet_value(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|e| FrameError::MalformedInput(format!("{:?}: {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_accepts_mixed_separators() {
        let bytes = parse_stream(" de ad:be-ef\n0102 ").expect("parse");
        assert_eq!(bytes, vec![0xde, 0xad, 0xbe, 0xef, 0x01, 0x02]);
    }

    #[test]
    fn stream_rejects_odd_digits_and_prefix() {
        assert!(matches!(parse_stream("dea"), Err(FrameError::MalformedInput(_))));
        assert!(matches!(parse_stream("0xde"), Err(FrameError::MalformedInput(_))));
        assert!(matches!(parse_stream("d e"), Err(FrameError::MalformedInput(_))));
    }

    #[test]
    fn stream_rejects_dangling_separators() {
        assert!(matches!(parse_stream("de:ad:"), Err(FrameError::MalformedInput(_))));
        assert!(matches!(parse_stream(":de:ad"), Err(FrameError::MalformedInput(_))));
        assert!(matches!(parse_stream("de::ad"), Err(FrameError::MalformedInput(_))));
        assert_eq!(parse_stream("de:ad ").expect("trailing space"), vec![0xde, 0xad]);
    }

    #[test]
    fn empty_stream_is_empty() {
        assert_eq!(parse_stream("").expect("parse"), Vec::<u8>::new());
    }

    #[test]
    fn mac_forms() {
        let want = [0x00, 0x11, 0x22, 0xaa, 0xbb, 0xcc];
        assert_eq!(parse_mac("00:11:22:aa:bb:cc").expect("colon"), want);
        assert_eq!(parse_mac("00-11-22-AA-BB-CC").expect("dash"), want);
        assert_eq!(parse_mac("001122aabbcc").expect("packed"), want);
        assert!(parse_mac("00:11:22:aa:bb").is_err());
        assert!(parse_mac("").is_err());
    }

    #[test]
    fn value_text_shapes() {
        assert_eq!(
            parse_value_text("0xaabb").expect("prefixed"),
            ValueText::Prefixed { prefix: "0x", digits: "aabb" }
        );
        assert_eq!(parse_value_text("AABB").expect("bare"), ValueText::Bare("AABB"));
        assert!(matches!(parse_value_text("0xzz"), Err(FrameError::ShapeMismatch(_))));
        assert!(matches!(parse_value_text("hello"), Err(FrameError::ShapeMismatch(_))));
    }
}
