//! `targetNamespace` extraction from a schema's root element

use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const TARGET_NAMESPACE: &[u8] = b"targetNamespace";

/// Read the `targetNamespace` attribute of a schema document's root element
///
/// Returns `None` when the file cannot be read, is not XML, has no root
/// element, or the attribute is missing or empty.
pub fn read_target_namespace(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut reader = Reader::from_reader(BufReader::new(file));
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf).ok()? {
            Event::Start(element) | Event::Empty(element) => {
                let attribute = element.try_get_attribute(TARGET_NAMESPACE).ok()??;
                let value = attribute.unescape_value().ok()?;
                return (!value.is_empty()).then(|| value.into_owned());
            }
            Event::Eof => return None,
            _ => {}
        }
        buf.clear();
    }
}
