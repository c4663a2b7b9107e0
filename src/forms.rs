//! Decoding of `application/x-www-form-urlencoded` bodies and query strings.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use url::form_urlencoded;

/// Parse a raw `key1=val1&key2=val2` string into a map of decoded keys to
/// decoded values.
///
/// Repeated keys (checkbox multi-select) are folded into one comma-joined
/// value in order of appearance, not a multi-value list. A key without `=`
/// maps to the empty string. Malformed percent-escapes are passed through
/// undecoded; the parse as a whole never fails.
pub fn parse(raw: &str) -> HashMap<String, String> {
    let mut params: HashMap<String, String> = HashMap::new();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match params.entry(key.into_owned()) {
            Entry::Occupied(mut entry) => {
                let joined = entry.get_mut();
                joined.push(',');
                joined.push_str(&value);
            }
            Entry::Vacant(entry) => {
                entry.insert(value.into_owned());
            }
        }
    }
    params
}
