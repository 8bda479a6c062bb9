/// Percent-decodes `input`.
///
/// `%XX` with two hex digits becomes that byte and `+` becomes a space.
/// Anything else, including a `%` without two hex digits after it, is copied
/// as is. Decoded bytes that are not UTF-8 are replaced lossily.
///
/// # Example
///
/// ```
/// # use tallyhttp::http::decode::url_decode;
/// assert_eq!(url_decode("a%20b+c%2"), "a b c%2");
/// ```
pub fn url_decode(input: &str) -> String {
    let src = input.as_bytes();
    let mut out = Vec::with_capacity(src.len());
    let mut i = 0;

    while i < src.len() {
        match src[i] {
            b'%' => match (src.get(i + 1).and_then(hex_value), src.get(i + 2).and_then(hex_value)) {
                (Some(hi), Some(lo)) => {
                    out.push(hi << 4 | lo);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: &u8) -> Option<u8> {
    (*b as char).to_digit(16).map(|d| d as u8)
}
