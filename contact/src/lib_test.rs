use super::*;

fn valid_submission() -> ContactSubmission {
    ContactSubmission {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        company: "Analytical Engines".to_owned(),
        project_type: Some("custom-harness".to_owned()),
        message: "We need 400 harnesses per month.".to_owned(),
        gdpr_consent: true,
        ..ContactSubmission::default()
    }
}

// =============================================================================
// is_valid_email
// =============================================================================

#[test]
fn email_shape_accepts_common_addresses() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@sub.example.com"));
    assert!(is_valid_email("x+tag@example.io"));
}

#[test]
fn email_shape_rejects_bad_values() {
    for bad in ["", "bad", "a@b", "@b.com", "a@.com", "a@b.", "a b@c.com", "a@b c.com", "a@b@c.com", "a@@b.com"] {
        assert!(!is_valid_email(bad), "expected {bad:?} to be rejected");
    }
}

#[test]
fn email_shape_allows_dot_after_first_char_of_domain() {
    assert!(is_valid_email("a@b..c"));
    assert!(!is_valid_email("a@.b"));
}

#[test]
fn email_shape_rejects_unicode_whitespace() {
    assert!(!is_valid_email("a\u{00a0}b@example.com"));
    assert!(!is_valid_email("a@exa\u{2003}mple.com"));
    assert!(!is_valid_email("a@example.com\n"));
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn validate_accepts_complete_submission() {
    assert_eq!(valid_submission().validate(), Ok(()));
}

#[test]
fn validate_reports_each_missing_field() {
    let blanks: [fn(&mut ContactSubmission); 5] = [
        |s| s.first_name.clear(),
        |s| s.last_name.clear(),
        |s| s.email = "  ".to_owned(),
        |s| s.company.clear(),
        |s| s.message.clear(),
    ];
    for blank in blanks {
        let mut s = valid_submission();
        blank(&mut s);
        assert_eq!(s.validate(), Err(ValidationError::MissingFields));
    }
}

#[test]
fn validate_requires_gdpr_consent() {
    let s = ContactSubmission { gdpr_consent: false, ..valid_submission() };
    assert_eq!(s.validate(), Err(ValidationError::ConsentRequired));
}

#[test]
fn validate_rejects_bad_email() {
    let s = ContactSubmission { email: "bad".to_owned(), ..valid_submission() };
    assert_eq!(s.validate(), Err(ValidationError::InvalidEmail));
    assert_eq!(ValidationError::InvalidEmail.to_string(), "Invalid email format");
}

#[test]
fn validate_does_not_need_optional_fields() {
    let s = ContactSubmission { project_type: None, marketing_consent: false, ..valid_submission() };
    assert!(s.validate().is_ok());
}

// =============================================================================
// field_errors
// =============================================================================

#[test]
fn field_errors_empty_for_valid_form() {
    assert!(valid_submission().field_errors().is_empty());
}

#[test]
fn field_errors_lists_every_problem() {
    let errors = ContactSubmission::default().field_errors();
    assert_eq!(errors.len(), 6);
    assert_eq!(errors.get(&Field::Email), Some(&"Email is required"));
    assert!(errors.contains_key(&Field::GdprConsent));
}

#[test]
fn field_errors_distinguishes_malformed_email() {
    let s = ContactSubmission { email: "nope@".to_owned(), ..valid_submission() };
    let errors = s.field_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(&Field::Email), Some(&"Please enter a valid email address"));
}

// =============================================================================
// serde
// =============================================================================

#[test]
fn submission_deserializes_camel_case_and_tolerates_missing_fields() {
    let body = r#"{"firstName":"A","lastName":"B","email":"bad","company":"C","message":"hi","gdprConsent":true}"#;
    let s: ContactSubmission = serde_json::from_str(body).unwrap();
    assert_eq!(s.first_name, "A");
    assert!(s.gdpr_consent);
    assert!(!s.marketing_consent);
    assert_eq!(s.project_type, None);
    assert_eq!(s.validate(), Err(ValidationError::InvalidEmail));

    let empty: ContactSubmission = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.validate(), Err(ValidationError::MissingFields));
}

#[test]
fn submission_serializes_utm_fields_in_camel_case() {
    let s = valid_submission().with_attribution(&UtmParams {
        source: Some("li".to_owned()),
        campaign: Some("q1".to_owned()),
        ..UtmParams::default()
    });
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["utmSource"], "li");
    assert_eq!(json["utmCampaign"], "q1");
    assert!(json.get("utmTerm").is_none());
    assert_eq!(json["gdprConsent"], true);
}

#[test]
fn error_body_omits_details_when_absent() {
    let json = serde_json::to_string(&ErrorBody::new("Invalid email format")).unwrap();
    assert_eq!(json, r#"{"error":"Invalid email format"}"#);
    let with = ErrorBody::new("Failed").with_details(Some("boom".to_owned()));
    assert_eq!(serde_json::to_value(&with).unwrap()["details"], "boom");
}

#[test]
fn contact_response_uses_conversion_data_key() {
    let resp = ContactResponse {
        success: true,
        message: "ok".to_owned(),
        conversion_data: Some(ConversionData::from(&valid_submission())),
    };
    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["conversionData"]["projectType"], "custom-harness");
    assert_eq!(json["conversionData"]["marketingConsent"], false);
}

// =============================================================================
// UtmParams
// =============================================================================

#[test]
fn utm_from_query_pairs_picks_known_keys_only() {
    let utm = UtmParams::from_query_pairs([("utm_source", "li"), ("utm_campaign", "q1"), ("page", "2"), ("utm_term", " ")]);
    assert_eq!(utm.source.as_deref(), Some("li"));
    assert_eq!(utm.campaign.as_deref(), Some("q1"));
    assert_eq!(utm.term, None);
    assert!(!utm.is_empty());
    assert!(UtmParams::from_query_pairs(Vec::<(String, String)>::new()).is_empty());
}

#[test]
fn utm_fresh_values_override_stored_per_field() {
    let stored = UtmParams { source: Some("li".to_owned()), medium: Some("social".to_owned()), ..UtmParams::default() };
    let fresh = UtmParams { source: Some("google".to_owned()), ..UtmParams::default() };
    let merged = stored.overridden_by(fresh);
    assert_eq!(merged.source.as_deref(), Some("google"));
    assert_eq!(merged.medium.as_deref(), Some("social"));
}

#[test]
fn utm_storage_shape_uses_snake_keys() {
    let utm = UtmParams { source: Some("li".to_owned()), ..UtmParams::default() };
    assert_eq!(serde_json::to_string(&utm).unwrap(), r#"{"utm_source":"li"}"#);
    let back: UtmParams = serde_json::from_str(r#"{"utm_source":"li","utm_content":"banner"}"#).unwrap();
    assert_eq!(back.content.as_deref(), Some("banner"));
}

#[test]
fn project_type_label_falls_back_to_value() {
    assert_eq!(project_type_label("panel-wiring"), "Control panel wiring");
    assert_eq!(project_type_label("mystery"), "mystery");
}
