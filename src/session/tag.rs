//! Monotonic millisecond tag generator for outbound text frames (C9).

use std::time::{SystemTime, UNIX_EPOCH};

/// Generate a fresh tag: the current time as whole milliseconds since the
/// Unix epoch, rendered as a decimal string (mirrors the source's
/// `GenerateLoginTag`).
pub fn new_tag() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is after the Unix epoch")
        .as_millis();
    millis.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_is_a_plain_decimal_string() {
        let tag = new_tag();
        assert!(!tag.is_empty());
        assert!(tag.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn successive_tags_do_not_decrease() {
        let a: u128 = new_tag().parse().unwrap();
        let b: u128 = new_tag().parse().unwrap();
        assert!(b >= a);
    }
}
