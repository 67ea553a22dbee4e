use mailbrief::*;

fn plain(text: &str) -> MessagePart {
    MessagePart::leaf("text/plain", PartBody::from_text(text))
}

fn html(text: &str) -> MessagePart {
    MessagePart::leaf("text/html", PartBody::from_text(text))
}

fn multipart(subtype: &str, parts: Vec<MessagePart>) -> MessagePart {
    MessagePart::multipart(format!("multipart/{subtype}"), parts)
}

#[test]
fn test_html_wins_over_plain() {
    let root = multipart(
        "alternative",
        vec![plain("Hello\r\nWorld"), html("<p>Hi <b>there</b></p>")],
    );

    let extraction = extract_body(&root);

    assert_eq!(extraction.text, "Hi there");
    assert_eq!(flatten(&extraction.text), "Hi there");
    assert!(extraction.diagnostics.is_empty());
}

#[test]
fn test_single_plain_leaf_trimmed_only_at_ends() {
    let root = plain("  multiple   spaces\nand a newline  ");

    let extraction = extract_body(&root);

    assert_eq!(extraction.text, "multiple   spaces\nand a newline");
    assert_eq!(flatten(&extraction.text), "multiple spaces and a newline");
}

#[test]
fn test_single_html_leaf() {
    let root = html("\n<p>Hello <i>you</i></p>\n");
    assert_eq!(extract_body(&root).text, "Hello you");
}

#[test]
fn test_single_leaf_unexpected_type() {
    let root = MessagePart::leaf("image/png", PartBody::from_bytes(&[0x89, 0x50, 0x4e]));

    let extraction = extract_body(&root);

    assert_eq!(extraction.text, "");
    assert!(extraction.diagnostics.as_slice()[0].is_unexpected_mime_type());
}

#[test]
fn test_deep_html_beats_shallow_plain() {
    let root = multipart(
        "mixed",
        vec![
            plain("shallow plain"),
            multipart(
                "related",
                vec![multipart("alternative", vec![html("<p>deep html</p>")])],
            ),
        ],
    );

    assert_eq!(extract_body(&root).text, "deep html");
}

#[test]
fn test_first_plain_in_document_order() {
    let root = multipart("mixed", vec![plain("first"), plain("second")]);
    assert_eq!(extract_body(&root).text, "first");
}

#[test]
fn test_empty_candidate_does_not_block_later_one() {
    let root = multipart("mixed", vec![plain(""), plain("  \r\n"), plain("third")]);

    // Whitespace is non-empty text, so the second leaf fills the slot.
    assert_eq!(extract_body(&root).text, "");

    let root = multipart("mixed", vec![plain(""), plain("second")]);
    assert_eq!(extract_body(&root).text, "second");
}

#[test]
fn test_empty_nested_plain_does_not_block_later_sibling() {
    let root = multipart(
        "mixed",
        vec![multipart("alternative", vec![plain("")]), plain("later")],
    );

    assert_eq!(extract_body(&root).text, "later");
}

#[test]
fn test_empty_nested_html_does_not_block_later_sibling() {
    let root = multipart(
        "mixed",
        vec![
            plain("plain fallback"),
            multipart("alternative", vec![html("")]),
            html("<p>later html</p>"),
        ],
    );

    assert_eq!(extract_body(&root).text, "later html");
}

#[test]
fn test_nested_candidate_resolved_before_later_sibling() {
    let root = multipart(
        "mixed",
        vec![
            multipart("alternative", vec![html("<i>nested</i>")]),
            html("<b>later sibling</b>"),
        ],
    );

    assert_eq!(extract_body(&root).text, "nested");
}

#[test]
fn test_earlier_sibling_beats_later_nested() {
    let root = multipart(
        "mixed",
        vec![
            html("<b>one</b>"),
            multipart("alternative", vec![html("<i>two</i>")]),
        ],
    );

    assert_eq!(extract_body(&root).text, "one");
}

#[test]
fn test_unknown_leaf_ignored() {
    let attachment = MessagePart {
        filename: Some("report.pdf".into()),
        ..MessagePart::leaf("application/pdf", PartBody::from_bytes(b"%PDF-1.7"))
    };
    let root = multipart("mixed", vec![attachment, plain("see attached")]);

    let extraction = extract_body(&root);

    assert_eq!(extraction.text, "see attached");
    assert_eq!(
        extraction.diagnostics.into_vec(),
        vec![Diagnostic::UnexpectedMimeType {
            mime_type: "application/pdf".into()
        }]
    );
}

#[test]
fn test_malformed_part_does_not_abort_extraction() {
    let broken = MessagePart::leaf("text/plain", PartBody::base64("abcde"));
    let root = multipart("mixed", vec![broken, plain("still here")]);

    let extraction = extract_body(&root);

    assert_eq!(extraction.text, "still here");
    assert_eq!(extraction.diagnostics.len(), 1);
    assert!(extraction.diagnostics.as_slice()[0].is_decode_failure());
}

#[test]
fn test_filled_slot_skips_decoding_later_parts() {
    let odd = MessagePart::leaf("text/plain", PartBody::encoded("raw", "x-uuencode"));
    let root = multipart("mixed", vec![plain("kept"), odd]);

    let extraction = extract_body(&root);

    assert_eq!(extraction.text, "kept");
    assert!(extraction.diagnostics.is_empty());
}

#[test]
fn test_unsupported_encoding_leaves_slot_open() {
    let odd = MessagePart::leaf("text/plain", PartBody::encoded("raw", "x-uuencode"));
    let root = multipart("mixed", vec![odd, plain("fallback")]);

    let extraction = extract_body(&root);

    assert_eq!(extraction.text, "fallback");
    assert!(extraction.diagnostics.as_slice()[0].is_unsupported_encoding());
}

#[test]
fn test_html_with_no_visible_text_still_wins() {
    let root = multipart(
        "alternative",
        vec![plain("plain version"), html("<img src=\"banner.png\">")],
    );

    assert_eq!(extract_body(&root).text, "");
}

#[test]
fn test_quoted_printable_part() {
    let part = MessagePart::leaf(
        "text/html",
        PartBody::encoded("<p>caf=C3=A9 =\r\nau lait</p>", "quoted-printable"),
    );
    let root = multipart("alternative", vec![part]);

    assert_eq!(extract_body(&root).text, "café au lait");
}

#[test]
fn test_mime_type_parameters_and_case() {
    let part = MessagePart::leaf("Text/Plain; charset=\"UTF-8\"", PartBody::from_text("ok"));
    let root = multipart("mixed", vec![part]);

    let extraction = extract_body(&root);

    assert_eq!(extraction.text, "ok");
    assert!(extraction.diagnostics.is_empty());
}

#[test]
fn test_leaf_without_body() {
    let root = multipart(
        "mixed",
        vec![MessagePart::multipart("text/plain", Vec::new())],
    );

    assert_eq!(extract_body(&root).text, "");
}

#[test]
fn test_children_take_precedence_over_body() {
    let mut root = multipart("mixed", vec![plain("from child")]);
    root.body = Some(PartBody::from_text("from container"));

    assert_eq!(extract_body(&root).text, "from child");
}

#[test]
fn test_plain_first_preference() {
    let root = multipart(
        "alternative",
        vec![html("<p>Hi <b>there</b></p>"), plain("  Hello\r\nWorld ")],
    );
    let options = ExtractOptions::default().with_preference(BodyPreference::PlainFirst);

    assert_eq!(extract_body_with(&root, &options).text, "Hello\r\nWorld");
}

#[test]
fn test_plain_first_falls_back_to_html() {
    let root = multipart("alternative", vec![html("<p>only html</p>")]);
    let options = ExtractOptions::default().with_preference(BodyPreference::PlainFirst);

    assert_eq!(extract_body_with(&root, &options).text, "only html");
}

#[test]
fn test_default_encoding_option() {
    let part = MessagePart::leaf(
        "text/plain",
        PartBody {
            data: "na=C3=AFve".into(),
            encoding: None,
            size: None,
        },
    );
    let options = ExtractOptions {
        default_encoding: "quoted-printable".into(),
        ..ExtractOptions::default()
    };

    assert_eq!(extract_body_with(&part, &options).text, "naïve");
}
