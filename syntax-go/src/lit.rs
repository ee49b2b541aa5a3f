//! Decoding of string literal source text.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralErrorKind {
  InvalidEscape,
  UnexpectedEnd,
  LineTerminator,
  UnescapedQuote,
  InvalidUtf8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiteralError {
  pub kind: LiteralErrorKind,
  // Byte offset into the literal body (quotes excluded).
  pub offset: usize,
}

fn parse_digits(raw: &str, escape_start: usize, count: usize, radix: u32) -> Result<u32, LiteralError> {
  let Some(digits) = raw.get(..count) else {
    return Err(LiteralError {
      kind: LiteralErrorKind::UnexpectedEnd,
      offset: escape_start,
    });
  };
  let mut value = 0u32;
  for ch in digits.chars() {
    let Some(digit) = ch.to_digit(radix) else {
      return Err(LiteralError {
        kind: LiteralErrorKind::InvalidEscape,
        offset: escape_start,
      });
    };
    value = value * radix + digit;
  }
  Ok(value)
}

enum Decoded {
  Byte(u8),
  Char(char),
}

// `raw` starts immediately after the backslash. Returns the number of bytes consumed.
fn decode_escape_sequence(raw: &str, escape_start: usize) -> Result<(usize, Decoded), LiteralError> {
  let invalid = LiteralError {
    kind: LiteralErrorKind::InvalidEscape,
    offset: escape_start,
  };
  let Some(first) = raw.chars().next() else {
    return Err(LiteralError {
      kind: LiteralErrorKind::UnexpectedEnd,
      offset: escape_start,
    });
  };
  let simple = |c: char| -> Result<(usize, Decoded), LiteralError> { Ok((1, Decoded::Char(c))) };
  match first {
    'a' => simple('\x07'),
    'b' => simple('\x08'),
    'f' => simple('\x0c'),
    'n' => simple('\n'),
    'r' => simple('\r'),
    't' => simple('\t'),
    'v' => simple('\x0b'),
    '\\' => simple('\\'),
    '"' => simple('"'),
    '0'..='7' => {
      let value = parse_digits(raw, escape_start, 3, 8)?;
      let byte = u8::try_from(value).map_err(|_| invalid)?;
      Ok((3, Decoded::Byte(byte)))
    }
    'x' => {
      let value = parse_digits(&raw[1..], escape_start, 2, 16)?;
      Ok((3, Decoded::Byte(value as u8)))
    }
    'u' => {
      let value = parse_digits(&raw[1..], escape_start, 4, 16)?;
      let c = char::from_u32(value).ok_or(invalid)?;
      Ok((5, Decoded::Char(c)))
    }
    'U' => {
      let value = parse_digits(&raw[1..], escape_start, 8, 16)?;
      let c = char::from_u32(value).ok_or(invalid)?;
      Ok((9, Decoded::Char(c)))
    }
    _ => Err(invalid),
  }
}

/// Decodes the body (quotes excluded) of an interpreted string literal.
///
/// Octal and hex escapes denote single bytes, so the decoded bytes are only
/// accepted if they form valid UTF-8 as a whole.
pub fn decode_interpreted(raw: &str) -> Result<String, LiteralError> {
  let mut norm = Vec::<u8>::with_capacity(raw.len());
  let mut offset = 0;
  while offset < raw.len() {
    let Some(ch) = raw[offset..].chars().next() else {
      break;
    };
    match ch {
      '\\' => {
        let after_backslash = offset + 1;
        let (consumed, decoded) = decode_escape_sequence(&raw[after_backslash..], offset)?;
        match decoded {
          Decoded::Byte(b) => norm.push(b),
          Decoded::Char(c) => {
            let mut buf = [0u8; 4];
            norm.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
          }
        }
        offset = after_backslash + consumed;
      }
      '\n' | '\r' => {
        return Err(LiteralError {
          kind: LiteralErrorKind::LineTerminator,
          offset,
        });
      }
      '"' => {
        return Err(LiteralError {
          kind: LiteralErrorKind::UnescapedQuote,
          offset,
        });
      }
      _ => {
        let mut buf = [0u8; 4];
        norm.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        offset += ch.len_utf8();
      }
    }
  }
  String::from_utf8(norm).map_err(|err| LiteralError {
    kind: LiteralErrorKind::InvalidUtf8,
    offset: err.utf8_error().valid_up_to(),
  })
}

/// Decodes the body (backquotes excluded) of a raw string literal. Carriage
/// returns are discarded.
pub fn decode_raw(raw: &str) -> Result<String, LiteralError> {
  if let Some(offset) = raw.find('`') {
    return Err(LiteralError {
      kind: LiteralErrorKind::UnescapedQuote,
      offset,
    });
  }
  Ok(raw.chars().filter(|&c| c != '\r').collect())
}

/// Decodes a quoted string literal, either `"..."` or `` `...` ``.
pub fn unquote(raw: &str) -> Option<String> {
  if raw.len() < 2 {
    return None;
  }
  // Both ends are checked to be ASCII quotes before slicing, so the body bounds are char boundaries.
  match (raw.as_bytes()[0], raw.as_bytes()[raw.len() - 1]) {
    (b'"', b'"') => decode_interpreted(&raw[1..raw.len() - 1]).ok(),
    (b'`', b'`') => decode_raw(&raw[1..raw.len() - 1]).ok(),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unquotes_plain_paths() {
    assert_eq!(unquote("\"fmt\""), Some("fmt".into()));
    assert_eq!(unquote("\"net/http\""), Some("net/http".into()));
    assert_eq!(unquote("`encoding/json`"), Some("encoding/json".into()));
  }

  #[test]
  fn decodes_escapes() {
    assert_eq!(unquote(r#""a\tb\n""#), Some("a\tb\n".into()));
    assert_eq!(unquote(r#""\x41\101é\U0001F600""#), Some("AAé😀".into()));
    assert_eq!(unquote(r#""say \"hi\"""#), Some("say \"hi\"".into()));
  }

  #[test]
  fn rejects_malformed_literals() {
    assert_eq!(unquote("\"fmt"), None);
    assert_eq!(unquote("'fmt'"), None);
    assert_eq!(unquote("\""), None);
    assert_eq!(unquote(r#""\q""#), None);
    assert_eq!(unquote(r#""\x4""#), None);
    assert_eq!(unquote(r#""\777""#), None);
    assert_eq!(unquote("\"a\nb\""), None);
    // A lone high byte is not valid UTF-8.
    assert_eq!(unquote(r#""\xff""#), None);
  }

  #[test]
  fn raw_literals_drop_carriage_returns() {
    assert_eq!(unquote("`a\r\nb`"), Some("a\nb".into()));
    assert_eq!(
      decode_raw("a`b").unwrap_err().kind,
      LiteralErrorKind::UnescapedQuote
    );
  }
}
