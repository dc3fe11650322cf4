use crate::constants::OSM_PRIMITIVES;
use crate::errors::{AppError, AppResult};
use crate::models::RawElement;
use quick_xml::escape::unescape;
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::io::BufRead;

/// Pull-based reader yielding one OSM primitive (`node`, `way`, `relation`)
/// at a time, together with its child elements.
///
/// Only the element currently being read is held in memory; everything
/// outside an OSM primitive (the `osm` root, `bounds`, ...) is skipped.
pub struct OsmReader<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    /// Open elements of the primitive being built, outermost first
    stack: Vec<RawElement>,
}

impl<R: BufRead> OsmReader<R> {
    pub fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            buf: Vec::with_capacity(8192),
            stack: Vec::new(),
        }
    }

    /// Reads until the next complete primitive, or `None` at end of document.
    pub fn next_element(&mut self) -> AppResult<Option<RawElement>> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(e) if !self.stack.is_empty() || is_primitive(&e) => {
                    self.stack.push(element_from_start(&e)?);
                }
                Event::Empty(e) => {
                    if self.stack.is_empty() {
                        if is_primitive(&e) {
                            return Ok(Some(element_from_start(&e)?));
                        }
                    } else {
                        let child = element_from_start(&e)?;
                        attach(&mut self.stack, child);
                    }
                }
                Event::End(_) => {
                    if let Some(finished) = self.stack.pop() {
                        if self.stack.is_empty() {
                            return Ok(Some(finished));
                        }
                        attach(&mut self.stack, finished);
                    }
                }
                Event::Eof => {
                    return match self.stack.first() {
                        Some(open) => Err(AppError::ParseError(format!(
                            "Unexpected end of document inside <{}> element",
                            open.name
                        ))),
                        None => Ok(None),
                    };
                }
                _ => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for OsmReader<R> {
    type Item = AppResult<RawElement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_element().transpose()
    }
}

fn is_primitive(e: &BytesStart) -> bool {
    OSM_PRIMITIVES
        .iter()
        .any(|name| e.name().as_ref() == name.as_bytes())
}

fn attach(stack: &mut [RawElement], child: RawElement) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(child);
    }
}

fn element_from_start(e: &BytesStart) -> AppResult<RawElement> {
    let mut element = RawElement::new(String::from_utf8_lossy(e.name().as_ref()));
    for attr in e.attributes() {
        let attr = attr.map_err(malformed_attribute)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attribute_value(&key, &attr.value)?;
        element.attributes.insert(key, value);
    }
    Ok(element)
}

fn malformed_attribute(e: AttrError) -> AppError {
    AppError::ParseError(format!("Malformed XML attribute: {e}"))
}

/// Decodes a raw attribute value the way an XML processor normalizes it:
/// literal tabs and line breaks become single spaces before entities and
/// character references are expanded, so `&#10;` still yields a newline.
fn attribute_value(key: &str, raw: &[u8]) -> AppResult<String> {
    let text = String::from_utf8_lossy(raw).replace("\r\n", " ");
    let text = text.replace(['\t', '\n', '\r'], " ");
    match unescape(&text) {
        Ok(value) => Ok(value.into_owned()),
        Err(e) => {
            let msg = format!("Failed to decode attribute '{key}': {e}");
            Err(AppError::ParseError(msg))
        }
    }
}
