//! Canned inputs for trying the checker without a document at hand.

/// Public pages that are handy for a first run.
pub const EXAMPLE_URLS: [&str; 2] = ["https://www.w3.org/WAI/", "https://example.com"];

/// A small page with one defect of each high-signal kind: a missing alt
/// attribute, an 8px font and two light-on-light color pairs.
pub const EXAMPLE_HTML: &str = r#"<html><body><h1 style="color: yellow; background-color: white;">Welcome</h1><img src="logo.jpg"><p style="font-size: 8px;">text</p><div style="color: lightgray; background-color: white;">text</div></body></html>"#;

/// All example inputs, URLs first.
pub fn all_examples() -> Vec<&'static str> {
    EXAMPLE_URLS
        .iter()
        .copied()
        .chain(std::iter::once(EXAMPLE_HTML))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{classify_input, DocumentInput};

    #[test]
    fn every_example_is_accepted_input() {
        let classified: Vec<bool> = all_examples()
            .into_iter()
            .map(|input| matches!(classify_input(input), Ok(DocumentInput::Markup(_))))
            .collect();
        assert_eq!(classified, vec![false, false, true]);
        for url in EXAMPLE_URLS {
            assert!(matches!(
                classify_input(url),
                Ok(DocumentInput::Locator(_))
            ));
        }
    }
}
