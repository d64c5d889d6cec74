//! Percent-encoding for generated URLs.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Component set with `/` left as a separator.
const PATH: &AsciiSet = &COMPONENT.remove(b'/');

/// Encode a query key or value.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Encode a path variable. Slashes stay literal.
pub fn encode_path(input: &str) -> String {
    utf8_percent_encode(input, PATH).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component() {
        assert_eq!(encode_component("test[value]"), "test%5Bvalue%5D");
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("it's (fine)!~*"), "it's%20(fine)!~*");
        assert_eq!(encode_component("a/b"), "a%2Fb");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn test_path_keeps_slash() {
        assert_eq!(encode_path("docs/intro page"), "docs/intro%20page");
        assert_eq!(encode_path("?#"), "%3F%23");
    }
}
