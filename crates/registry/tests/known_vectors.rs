//! Literal vectors for every identifier family, exercised through the
//! public facade.

use taxid_registry::{
    by_code, determine_transaction_type, format, generate, is_valid, parse, split_rate, validate,
    GstComponent, GstTransactionType, IdentifierKind, SegmentValues, ValidationErrorKind,
};

#[test]
fn gstin_known_vector() {
    let result = validate(IdentifierKind::Gstin, "27AAPFU0939F1ZV");
    assert!(result.is_valid);
    assert_eq!(result.segments.get("pan"), Some("AAPFU0939F"));

    let parsed = parse(IdentifierKind::Gstin, "27AAPFU0939F1ZV").unwrap();
    assert_eq!(parsed.lookup("27").unwrap().name, "Maharashtra");
}

#[test]
fn gstin_checksum_mismatch_vector() {
    let result = validate(IdentifierKind::Gstin, "27AAPFU0939F1ZX");
    assert_eq!(
        result.error_kind(),
        Some(ValidationErrorKind::InvalidCheckDigit)
    );
}

#[test]
fn spanish_nif_vectors() {
    assert!(is_valid(IdentifierKind::Nif, "12345678Z"));
    assert!(!is_valid(IdentifierKind::Nif, "12345678X"));
}

#[test]
fn spanish_cif_vectors() {
    // Type B renders the digit form of the control; body 1234567 → 4.
    assert!(is_valid(IdentifierKind::Cif, "B12345674"));
    let result = validate(IdentifierKind::Cif, "B12345678");
    assert_eq!(
        result.error_kind(),
        Some(ValidationErrorKind::InvalidCheckDigit)
    );
}

#[test]
fn japan_corporate_number_vectors() {
    let parts = SegmentValues::new().with("base_number", "000012345678");
    let number = generate(IdentifierKind::JpCorporateNumber, &parts).unwrap();
    assert!(is_valid(IdentifierKind::JpCorporateNumber, &number));

    // Flip the leading check digit.
    let flipped_digit = if number.starts_with('9') { '0' } else { '9' };
    let flipped = format!("{flipped_digit}{}", &number[1..]);
    let result = validate(IdentifierKind::JpCorporateNumber, &flipped);
    assert_eq!(
        result.error_kind(),
        Some(ValidationErrorKind::InvalidCheckDigit)
    );
}

#[test]
fn japan_invoice_registration_wraps_corporate_number() {
    let parts = SegmentValues::new().with("base_number", "000012345678");
    let number = generate(IdentifierKind::JpInvoiceRegistration, &parts).unwrap();
    assert!(is_valid(IdentifierKind::JpInvoiceRegistration, &number));
    assert!(number.starts_with('T'));
    assert!(is_valid(IdentifierKind::JpInvoiceRegistration, &number.to_lowercase()));
}

#[test]
fn uk_nino_vectors() {
    assert!(is_valid(IdentifierKind::UkNino, "AA123456C"));

    let first_letter = validate(IdentifierKind::UkNino, "DA123456C");
    assert_eq!(
        first_letter.error_kind(),
        Some(ValidationErrorKind::InvalidLookupCode)
    );

    let prefix_pair = validate(IdentifierKind::UkNino, "GB123456C");
    assert_eq!(
        prefix_pair.error_kind(),
        Some(ValidationErrorKind::InvalidLookupCode)
    );
}

#[test]
fn uk_structural_kinds_accept_documented_forms() {
    for (kind, value) in [
        (IdentifierKind::UkVat, "GB123456789"),
        (IdentifierKind::UkVat, "GB123456789012"),
        (IdentifierKind::UkVat, "GBGD001"),
        (IdentifierKind::UkVat, "GBHA599"),
        (IdentifierKind::UkCompanyNumber, "01234567"),
        (IdentifierKind::UkCompanyNumber, "SC123456"),
        (IdentifierKind::UkCompanyNumber, "123456"),
        (IdentifierKind::UkPaye, "123/AB456"),
    ] {
        assert!(is_valid(kind, value), "{kind}: {value} should validate");
    }
}

#[test]
fn gst_cross_field_vectors() {
    let maharashtra_a = "27AAPFU0939F1ZV";
    let maharashtra_b = generate(
        IdentifierKind::Gstin,
        &SegmentValues::new().with("state_code", "27"),
    )
    .unwrap();
    let karnataka = generate(
        IdentifierKind::Gstin,
        &SegmentValues::new().with("state_code", "29"),
    )
    .unwrap();

    let intra = determine_transaction_type(maharashtra_a, &maharashtra_b).unwrap();
    assert_eq!(intra.transaction_type, GstTransactionType::IntraState);
    assert_eq!(
        intra.tax_components,
        vec![GstComponent::Cgst, GstComponent::Sgst]
    );

    let inter = determine_transaction_type(maharashtra_a, &karnataka).unwrap();
    assert_eq!(inter.transaction_type, GstTransactionType::InterState);
    assert_eq!(inter.tax_components, vec![GstComponent::Igst]);

    let split = split_rate(18.0, GstTransactionType::IntraState, false);
    assert_eq!((split.cgst, split.sgst), (Some(9.0), Some(9.0)));
    let split = split_rate(18.0, GstTransactionType::InterState, false);
    assert_eq!(split.igst, Some(18.0));
}

#[test]
fn lookup_accessors_answer_through_the_facade() {
    assert_eq!(
        by_code(IdentifierKind::Gstin, "99").unwrap().name,
        "Centre Jurisdiction"
    );
    assert!(by_code(IdentifierKind::Gstin, "00").is_none());
}

#[test]
fn format_examples() {
    assert_eq!(
        format(IdentifierKind::Gstin, "27aapfu0939f1zv", None),
        "27-AAPFU0939F-1ZV"
    );
    assert_eq!(
        format(IdentifierKind::UkNino, "AA123456C", None),
        "AA 12 34 56 C"
    );
    assert_eq!(
        format(IdentifierKind::JpCorporateNumber, "2000012345678", None),
        "2-0000-1234-5678"
    );
}

#[test]
fn results_serialize_for_the_api_layer() {
    let result = validate(IdentifierKind::Nif, "12345678Z");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["is_valid"], true);
    assert_eq!(json["normalized_value"], "12345678Z");

    let result = validate(IdentifierKind::Nif, "12345678X");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["error"]["kind"], "invalid_check_digit");
}
