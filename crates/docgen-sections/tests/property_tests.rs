use docgen_sections::{Document, MarkerPattern, Multiplicity};
use proptest::prelude::*;

fn markers() -> (MarkerPattern, MarkerPattern) {
    (
        MarkerPattern::new(r"^<!-- X -->$").unwrap(),
        MarkerPattern::new(r"^<!-- /X -->$").unwrap(),
    )
}

/// Lines that can never be mistaken for a marker.
fn body_line() -> impl Strategy<Value = String> {
    "[a-z #*-]{0,12}".prop_map(|s| format!("{s}\n"))
}

proptest! {
    #[test]
    fn test_replace_is_idempotent(
        before in prop::collection::vec(body_line(), 0..5),
        old in prop::collection::vec(body_line(), 0..5),
        after in prop::collection::vec(body_line(), 0..5),
        new in prop::collection::vec(body_line(), 0..5),
    ) {
        let (start, end) = markers();
        let text = format!(
            "{}<!-- X -->\n{}<!-- /X -->\n{}",
            before.concat(),
            old.concat(),
            after.concat()
        );

        let mut doc = Document::from_text("t.md", &text);
        doc.replace_section(&start, &end, &new, Multiplicity::Unique).unwrap();
        let once = doc.text();

        doc.replace_section(&start, &end, &new, Multiplicity::Unique).unwrap();
        prop_assert_eq!(&once, &doc.text());

        // Round trip: the interior reads back as exactly what was written.
        prop_assert_eq!(doc.section(&start, &end).unwrap(), new.clone());

        // Everything outside the region is untouched.
        let expected = format!(
            "{}<!-- X -->\n{}<!-- /X -->\n{}",
            before.concat(),
            new.concat(),
            after.concat()
        );
        prop_assert_eq!(once, expected);
    }
}
