use mailbrief::*;

#[test]
fn test_decode_base64_padded() {
    let mut diagnostics = Diagnostics::new();
    let text = decode("SGVsbG8gV29ybGQ=", "base64", &mut diagnostics);

    assert_eq!(text, "Hello World");
    assert!(diagnostics.is_empty());
}

#[test]
fn test_decode_base64_unpadded() {
    let mut diagnostics = Diagnostics::new();
    assert_eq!(decode("SGVsbG8", "base64", &mut diagnostics), "Hello");
    assert!(diagnostics.is_empty());
}

#[test]
fn test_decode_base64_url_safe_and_standard_alphabets() {
    let mut diagnostics = Diagnostics::new();

    assert_eq!(decode("PDw_Pz8-Pg==", "base64", &mut diagnostics), "<<???>>");
    assert_eq!(decode("PDw/Pz8+Pg==", "base64", &mut diagnostics), "<<???>>");
    assert!(diagnostics.is_empty());
}

#[test]
fn test_decode_base64_skips_line_breaks() {
    let mut diagnostics = Diagnostics::new();
    assert_eq!(decode("SGVs\r\nbG8=\r\n", "base64", &mut diagnostics), "Hello");
}

#[test]
fn test_decode_base64_separately_padded_chunks() {
    let mut diagnostics = Diagnostics::new();

    assert_eq!(decode("SGk=SGk=", "base64", &mut diagnostics), "HiHi");
    assert_eq!(decode("SGk=IQ==", "base64", &mut diagnostics), "Hi!");
    assert_eq!(
        decode("SGVsbG8=\r\nV29ybGQ=", "base64", &mut diagnostics),
        "HelloWorld"
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn test_decode_base64_malformed_chunk_reports_failure() {
    let mut diagnostics = Diagnostics::new();

    assert_eq!(decode("SGk=abcde", "base64", &mut diagnostics), "");
    assert!(diagnostics.as_slice()[0].is_decode_failure());
}

#[test]
fn test_decode_base64_replaces_invalid_utf8() {
    let mut diagnostics = Diagnostics::new();
    let text = decode("SP9J", "base64", &mut diagnostics);

    assert_eq!(text, "H\u{FFFD}I");
    assert!(diagnostics.is_empty());
}

#[test]
fn test_decode_malformed_base64_reports_failure() {
    let mut diagnostics = Diagnostics::new();
    let text = decode("abcde", "base64", &mut diagnostics);

    assert_eq!(text, "");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.as_slice()[0].is_decode_failure());
}

#[test]
fn test_decode_quoted_printable() {
    let mut diagnostics = Diagnostics::new();
    let text = decode(
        "caf=C3=A9 soft=\r\nbreak",
        "quoted-printable",
        &mut diagnostics,
    );

    assert_eq!(text, "café softbreak");
    assert!(diagnostics.is_empty());
}

#[test]
fn test_decode_unsupported_encoding() {
    let mut diagnostics = Diagnostics::new();
    let text = decode("plain words", "7bit", &mut diagnostics);

    assert_eq!(text, "");
    assert_eq!(
        diagnostics.into_vec(),
        vec![Diagnostic::UnsupportedEncoding {
            encoding: "7bit".into()
        }]
    );
}

#[test]
fn test_decode_tag_is_case_insensitive() {
    let mut diagnostics = Diagnostics::new();

    assert_eq!(decode("SGk=", " BASE64 ", &mut diagnostics), "Hi");
    assert_eq!(decode("Hi=21", "Quoted-Printable", &mut diagnostics), "Hi!");
    assert!(diagnostics.is_empty());
}

#[test]
fn test_decode_empty_payload() {
    let mut diagnostics = Diagnostics::new();

    assert_eq!(decode("", "base64", &mut diagnostics), "");
    assert_eq!(decode("", "quoted-printable", &mut diagnostics), "");
    assert!(diagnostics.is_empty());
}

#[test]
fn test_transfer_encoding_from_tag() {
    assert_eq!(
        TransferEncoding::from_tag("base64"),
        Some(TransferEncoding::Base64)
    );
    assert_eq!(
        TransferEncoding::from_tag("QUOTED-PRINTABLE"),
        Some(TransferEncoding::QuotedPrintable)
    );
    assert_eq!(TransferEncoding::from_tag("binary"), None);
}

#[test]
fn test_encode_base64_is_url_safe() {
    let encoded = encode_base64(b"<<???>>");
    assert_eq!(encoded, "PDw_Pz8-Pg==");
    assert_eq!(decode_base64(&encoded).unwrap(), b"<<???>>");
}
