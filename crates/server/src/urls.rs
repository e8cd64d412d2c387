//! Registry path -> web URL mapping

use percent_encoding::{percent_encode, AsciiSet, CONTROLS};
use std::path::{Component, Path};

/// Prefix under which the static root is served
pub const STATIC_PREFIX: &str = "/static";

/// Bytes escaped inside a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// URL for a file under the static root
///
/// Each path component is percent-encoded from its raw bytes, so reserved
/// characters and non-UTF-8 names survive the round trip. Returns `None` when
/// the path is not inside `static_root`; such a file cannot be served.
pub fn static_url(static_root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(static_root).ok()?;

    let mut url = String::from(STATIC_PREFIX);
    for component in relative.components() {
        let Component::Normal(segment) = component else {
            return None;
        };
        url.push('/');
        url.extend(percent_encode(segment.as_encoded_bytes(), PATH_SEGMENT));
    }

    if url.len() == STATIC_PREFIX.len() {
        return None;
    }
    Some(url)
}
