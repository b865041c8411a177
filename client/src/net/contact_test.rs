use super::*;

fn filled() -> ContactSubmission {
    ContactSubmission {
        name: "Budi".to_owned(),
        email: "budi@example.test".to_owned(),
        subject: "Quotation".to_owned(),
        message: "Please send a quote for 10k hinges.".to_owned(),
    }
}

#[test]
fn submission_serializes_with_four_named_fields() {
    let value = serde_json::to_value(filled()).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    assert_eq!(obj["name"], "Budi");
    assert_eq!(obj["email"], "budi@example.test");
    assert_eq!(obj["subject"], "Quotation");
    assert_eq!(obj["message"], "Please send a quote for 10k hinges.");
}

#[test]
fn check_status_accepts_only_2xx() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(204), Ok(()));
    assert_eq!(check_status(302), Err(ContactError::Status(302)));
    assert_eq!(check_status(422), Err(ContactError::Status(422)));
    assert_eq!(check_status(500), Err(ContactError::Status(500)));
}

#[test]
fn error_messages_name_the_failure() {
    assert_eq!(
        ContactError::Status(503).to_string(),
        "contact endpoint returned status 503"
    );
    assert!(ContactError::Network("offline".to_owned()).to_string().contains("offline"));
}

#[tokio::test]
async fn submit_outside_browser_is_unavailable() {
    let result = submit_contact_form("https://formspree.io/f/meelvrlp", &filled()).await;
    assert_eq!(result, Err(ContactError::Unavailable));
}
