/// Percent-encoding of link and image destinations

/// Reserved and unreserved URI punctuation that is passed through unescaped
const SAFE_PUNCTUATION: &[u8] = b";/?:@&=+$,-_.!~*'()#";

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn is_safe(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || SAFE_PUNCTUATION.contains(&byte)
}

/// Percent-encode every byte of `uri` outside the safe set.
///
/// Existing `%XX` escapes are kept as they are, a stray `%` becomes `%25`,
/// and non-ASCII characters are escaped one UTF-8 byte at a time. Applying
/// this to its own output returns the output unchanged.
#[cfg_attr(test, test_fuzz::test_fuzz)]
pub fn normalize_uri(uri: &str) -> String {
    let bytes = uri.as_bytes();
    let mut result = String::with_capacity(uri.len());

    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if byte == b'%' {
            if i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit()
            {
                result.push_str(&uri[i..i + 3]);
                i += 3;
                continue;
            }
            result.push_str("%25");
        } else if is_safe(byte) {
            result.push(byte as char);
        } else {
            result.push('%');
            result.push(HEX_DIGITS[(byte >> 4) as usize] as char);
            result.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
        }
        i += 1;
    }

    result
}
