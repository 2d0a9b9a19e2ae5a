//! In-page anchor links.

/// The element id an in-page link points at, if any.
///
/// `#` on its own and non-fragment hrefs are not scroll targets.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments() {
        assert_eq!(fragment_id("#services"), Some("services"));
        assert_eq!(fragment_id(" #contact "), Some("contact"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/about#team"), None);
        assert_eq!(fragment_id(""), None);
    }
}
