use super::*;

fn email_identity() -> Identity {
    Identity {
        id: "u1".to_owned(),
        name: "Alex Rivera".to_owned(),
        avatar_url: avatar_url("alex@example.com"),
        contact: Contact::Email { email: "alex@example.com".to_owned() },
    }
}

// =============================================================
// Identity JSON shape
// =============================================================

#[test]
fn identity_serializes_contact_with_kind_tag() {
    let json = serde_json::to_value(email_identity()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "u1",
            "name": "Alex Rivera",
            "avatar_url": "https://api.dicebear.com/7.x/avataaars/svg?seed=alex@example.com",
            "contact": { "kind": "email", "email": "alex@example.com" }
        })
    );
}

#[test]
fn oauth_contact_uses_oauth_kind() {
    let contact = Contact::OAuth { provider: "google".to_owned(), email: "user@gmail.com".to_owned() };
    let json = serde_json::to_value(&contact).unwrap();
    assert_eq!(json["kind"], "oauth");
    assert_eq!(json["provider"], "google");
}

#[test]
fn phone_contact_deserializes() {
    let raw = r#"{"id":"u2","name":"Sam","avatar_url":"x","contact":{"kind":"phone","phone":"+445551234"}}"#;
    let identity: Identity = serde_json::from_str(raw).unwrap();
    assert_eq!(identity.contact, Contact::Phone { phone: "+445551234".to_owned() });
}

#[test]
fn untagged_legacy_record_is_rejected() {
    let raw = r#"{"id":1,"name":"Student","email":"a@b.c","avatar":"x"}"#;
    assert!(serde_json::from_str::<Identity>(raw).is_err());
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn first_name_takes_first_word() {
    assert_eq!(email_identity().first_name(), "Alex");
}

#[test]
fn first_name_of_blank_name_is_blank() {
    let mut identity = email_identity();
    identity.name = "   ".to_owned();
    assert_eq!(identity.first_name(), "   ");
}

#[test]
fn contact_label_per_kind() {
    let mut identity = email_identity();
    assert_eq!(identity.contact_label(), "alex@example.com");
    identity.contact = Contact::Phone { phone: "+15550100".to_owned() };
    assert_eq!(identity.contact_label(), "+15550100");
    identity.contact = Contact::OAuth { provider: "google".to_owned(), email: "user@gmail.com".to_owned() };
    assert_eq!(identity.contact_label(), "user@gmail.com");
}

#[test]
fn credentials_debug_hides_passwords() {
    let creds = Credentials::Email {
        name: "A".to_owned(),
        email: "a@b.co".to_owned(),
        password: "hunter22".to_owned(),
        confirm_password: "hunter22".to_owned(),
    };
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("a@b.co"));
    assert!(!rendered.contains("hunter22"));
}
