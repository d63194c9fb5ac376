use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode page with {encoding}")]
    DecodeFailure { encoding: String },
}

/// Text of an article page: BOM, then the Content-Type charset, then chardetng's guess.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> Result<String, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(encoding) = content_type
        .and_then(header_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return decode_with(bytes, encoding);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn header_charset(content_type: &str) -> Option<&str> {
    content_type.split(';').find_map(|part| {
        let (key, value) = part.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\'']))
    })
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Result<String, DecodeError> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_charset_wins_over_detection() {
        let latin1 = b"<p>caf\xe9</p>";
        let text = decode_page(latin1, Some("text/html; Charset=\"ISO-8859-1\"")).unwrap();
        assert_eq!(text, "<p>café</p>");
    }

    #[test]
    fn bom_is_honoured() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("<h1>Ünïcode</h1>".as_bytes());
        assert_eq!(decode_page(&bytes, Some("text/html; charset=latin1")).unwrap(), "<h1>Ünïcode</h1>");
    }

    #[test]
    fn invalid_utf8_with_declared_charset_fails() {
        let err = decode_page(&[0xC3, 0x28], Some("text/html; charset=utf-8")).unwrap_err();
        assert_eq!(
            err,
            DecodeError::DecodeFailure {
                encoding: "UTF-8".to_string()
            }
        );
    }
}
