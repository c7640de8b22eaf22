use std::borrow::Cow;

use quick_xml::{escape::escape, events::Event, Reader};

use crate::BuilderError;

/// How interpolated values are written into the XML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XmlPolicy {
  /// Values are written exactly as given, unquoted and unescaped.
  /// The caller owns any escaping.
  #[default]
  Verbatim,
  /// Values are double-quoted and XML-escaped, producing well-formed XML
  Escaped,
}

impl XmlPolicy {
  /// Renders an attribute value
  pub fn attr<'a>(&self, value: &'a str) -> Cow<'a, str> {
    match self {
      XmlPolicy::Verbatim => Cow::Borrowed(value),
      XmlPolicy::Escaped => Cow::Owned(format!("\"{}\"", escape(value))),
    }
  }

  /// Renders character data of an element body
  pub fn body<'a>(&self, value: &'a str) -> Cow<'a, str> {
    match self {
      XmlPolicy::Verbatim => Cow::Borrowed(value),
      XmlPolicy::Escaped => escape(value),
    }
  }
}

/// Chars allowed by the XML 1.0 `Char` production
fn is_xml_char(c: char) -> bool {
  matches!(
    c,
    '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
  )
}

/// Parses `xml` to the end, checking chars, tags and attributes
pub fn check_well_formed(xml: &str) -> Result<(), BuilderError> {
  if let Some((pos, c)) = xml.char_indices().find(|(_, c)| !is_xml_char(*c)) {
    return Err(BuilderError::MalformedXml(format!(
      "illegal character U+{:04X} at byte {pos}",
      c as u32
    )));
  }

  let mut reader = Reader::from_str(xml);
  let mut depth = 0usize;

  loop {
    match reader.read_event() {
      Ok(Event::Eof) if depth == 0 => return Ok(()),
      Ok(Event::Eof) => {
        return Err(BuilderError::MalformedXml(format!(
          "{depth} element(s) left open at end of document"
        )))
      }
      Ok(Event::Start(tag)) => {
        depth += 1;
        for attr in tag.attributes() {
          attr.map_err(|e| BuilderError::MalformedXml(e.to_string()))?;
        }
      }
      Ok(Event::Empty(tag)) => {
        for attr in tag.attributes() {
          attr.map_err(|e| BuilderError::MalformedXml(e.to_string()))?;
        }
      }
      Ok(Event::End(_)) => depth = depth.saturating_sub(1),
      Ok(_) => {}
      Err(e) => return Err(BuilderError::MalformedXml(e.to_string())),
    }
  }
}
