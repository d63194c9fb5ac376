//! RSS item link extraction.

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("malformed feed: {0}")]
pub struct FeedError(String);

/// `<item><link>` values in document order. Channel-level links are ignored.
pub fn parse_item_links(xml: &str) -> Result<Vec<String>, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut links = Vec::new();
    let mut in_item = false;
    let mut in_link = false;
    let mut current = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"item" => in_item = true,
                b"link" if in_item => {
                    in_link = true;
                    current.clear();
                }
                _ => {}
            },
            Ok(Event::Text(text)) if in_link => {
                let text = text.unescape().map_err(|err| FeedError(err.to_string()))?;
                current.push_str(&text);
            }
            Ok(Event::CData(data)) if in_link => {
                current.push_str(&String::from_utf8_lossy(&data));
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"link" if in_link => {
                    in_link = false;
                    let link = current.trim();
                    if !link.is_empty() {
                        links.push(link.to_string());
                    }
                }
                b"item" => in_item = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(FeedError(format!(
                    "at byte {}: {err}",
                    reader.error_position()
                )))
            }
        }
    }

    Ok(links)
}
