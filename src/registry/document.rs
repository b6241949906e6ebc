//! Parsing of the ABN registry's XML result document.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::core::{BusinessRegistration, TinError};

/// Fields read from a registry response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryDocument {
    /// Raw `goodsAndServicesTax` text.
    pub goods_and_services_tax: Option<String>,
    pub organisation_name: Option<String>,
    /// `address/stateCode`
    pub state_code: Option<String>,
    /// `address/postcode`
    pub postcode: Option<String>,
}

impl RegistryDocument {
    /// GST registration requires the flag to read exactly `true`.
    ///
    /// The text is compared untrimmed, so ` true ` does not qualify.
    pub fn is_gst_registered(&self) -> bool {
        self.goods_and_services_tax.as_deref() == Some("true")
    }

    pub fn into_registration(self) -> BusinessRegistration {
        BusinessRegistration::new(self.organisation_name, self.state_code, self.postcode)
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::GoodsAndServicesTax => &mut self.goods_and_services_tax,
            Field::OrganisationName => &mut self.organisation_name,
            Field::StateCode => &mut self.state_code,
            Field::Postcode => &mut self.postcode,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    GoodsAndServicesTax,
    OrganisationName,
    StateCode,
    Postcode,
}

impl Field {
    /// Field read from the innermost element of `path`, if any.
    fn at(path: &[String]) -> Option<Self> {
        let current = path.last()?;
        let parent = path.len().checked_sub(2).map(|i| path[i].as_str());
        match (parent, current.as_str()) {
            (_, "goodsAndServicesTax") => Some(Self::GoodsAndServicesTax),
            (_, "organisationName") => Some(Self::OrganisationName),
            (Some("address"), "stateCode") => Some(Self::StateCode),
            (Some("address"), "postcode") => Some(Self::Postcode),
            _ => None,
        }
    }
}

/// Text collected for a field until its element closes.
struct Capture {
    field: Field,
    depth: usize,
    text: String,
}

fn local_name(name: &[u8]) -> String {
    std::str::from_utf8(name).unwrap_or("").to_string()
}

/// Parse a registry response body.
///
/// Element names are compared without namespace prefixes.
/// `goodsAndServicesTax` and `organisationName` may appear anywhere;
/// `stateCode` and `postcode` are read only inside an `address` element.
/// A field takes all text and CDATA inside its first element, nested
/// elements included, untrimmed. An empty body yields an empty document.
///
/// # Errors
///
/// Returns [`TinError::Xml`] if the body is not well-formed XML, including
/// a document that ends with elements still open.
pub fn parse_registry_document(xml: &str) -> Result<RegistryDocument, TinError> {
    let mut reader = Reader::from_str(xml);

    let mut doc = RegistryDocument::default();
    let mut path: Vec<String> = Vec::new();
    let mut capture: Option<Capture> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                path.push(local_name(e.local_name().as_ref()));
                if capture.is_none() {
                    if let Some(field) = Field::at(&path) {
                        if doc.slot(field).is_none() {
                            capture = Some(Capture {
                                field,
                                depth: path.len(),
                                text: String::new(),
                            });
                        }
                    }
                }
            }
            Ok(Event::Empty(ref e)) => {
                path.push(local_name(e.local_name().as_ref()));
                if capture.is_none() {
                    if let Some(field) = Field::at(&path) {
                        doc.slot(field).get_or_insert_with(String::new);
                    }
                }
                path.pop();
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| TinError::Xml(format!("bad text content: {err}")))?;
                if let Some(c) = capture.as_mut() {
                    c.text.push_str(&text);
                }
            }
            Ok(Event::CData(ref e)) => {
                let raw: &[u8] = e;
                let text = std::str::from_utf8(raw)
                    .map_err(|err| TinError::Xml(format!("bad CDATA content: {err}")))?;
                if let Some(c) = capture.as_mut() {
                    c.text.push_str(text);
                }
            }
            Ok(Event::End(_)) => {
                if let Some(c) = capture.take_if(|c| c.depth == path.len()) {
                    doc.slot(c.field).get_or_insert(c.text);
                }
                path.pop();
            }
            Ok(Event::Eof) => {
                if let Some(open) = path.last() {
                    return Err(TinError::Xml(format!(
                        "document ended inside <{open}> at position {}",
                        reader.buffer_position()
                    )));
                }
                break;
            }
            Err(e) => {
                return Err(TinError::Xml(format!(
                    "parse error at position {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    Ok(doc)
}
