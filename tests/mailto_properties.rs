use pretty_assertions::assert_eq;
use rstest::*;

use contactui::{compose, ContactForm, MailtoLink, Recipient};

#[fixture]
fn recipient() -> Recipient {
    Recipient::default()
}

#[rstest]
#[case("Jane Doe", "jane@x.com", "Hi there")]
#[case("Tom & Jerry", "tom+jerry@x.com", "50% off? a=b&c=d")]
#[case("Zoë Ångström", "zoe@例え.jp", "Grüße\n\nこんにちは 🙂")]
#[case("O'Brien (Dev)", "ob@x.io", "line one\r\nline two\ttabbed")]
#[case("#hash", "h@x.com", "+plus+ /slash/ ?question? #fragment")]
fn test_uri_round_trips_subject_and_body(
    recipient: Recipient,
    #[case] name: &str,
    #[case] email: &str,
    #[case] message: &str,
) {
    let form = ContactForm::new(name, email, message);
    let link = compose(&form, &recipient);

    let parsed = MailtoLink::parse(&link.to_uri()).unwrap();

    assert_eq!(parsed.subject, format!("Portfolio Inquiry from {name}"));
    assert_eq!(
        parsed.body,
        format!("Dear Amir Masnavi,\n\n{message}\n\n---\nBest regards,\n{name}\n{email}")
    );
}

#[rstest]
#[case(ContactForm::new("Mallory", "mallory@evil.com", "hi"))]
#[case(ContactForm::new("a@b.com?cc=x@y.com", "x@y.com", "mailto:x@y.com"))]
#[case(ContactForm::new("", "", ""))]
fn test_recipient_is_always_the_configured_address(recipient: Recipient, #[case] form: ContactForm) {
    let uri = compose(&form, &recipient).to_uri();

    assert!(uri.starts_with("mailto:a.masnavi1382@gmail.com?"));
    assert_eq!(MailtoLink::parse(&uri).unwrap().recipient, recipient.address);
}

#[rstest]
fn test_jane_doe_example(recipient: Recipient) {
    let form = ContactForm::new("Jane Doe", "jane@x.com", "Hi there");

    let uri = compose(&form, &recipient).to_uri();

    assert_eq!(
        uri,
        "mailto:a.masnavi1382@gmail.com\
         ?subject=Portfolio%20Inquiry%20from%20Jane%20Doe\
         &body=Dear%20Amir%20Masnavi%2C%0A%0AHi%20there%0A%0A---%0ABest%20regards%2C%0AJane%20Doe%0Ajane%40x.com"
    );
    let parsed = MailtoLink::parse(&uri).unwrap();
    assert!(parsed.body.starts_with("Dear Amir Masnavi,"));
    assert!(parsed.body.contains("Hi there"));
    assert!(parsed.body.ends_with("Best regards,\nJane Doe\njane@x.com"));
}

#[rstest]
fn test_empty_message_still_composes(recipient: Recipient) {
    let form = ContactForm::new("Jane Doe", "jane@x.com", "");

    let parsed = MailtoLink::parse(&compose(&form, &recipient).to_uri()).unwrap();

    assert_eq!(
        parsed.body,
        "Dear Amir Masnavi,\n\n\n\n---\nBest regards,\nJane Doe\njane@x.com"
    );
}

#[rstest]
fn test_injected_query_stays_inside_body(recipient: Recipient) {
    let form = ContactForm::new(
        "Eve&subject=Hijacked",
        "eve@x.com",
        "hello&subject=Free money&body=gotcha",
    );

    let uri = compose(&form, &recipient).to_uri();

    let (_, query) = uri.split_once('?').unwrap();
    let keys: Vec<&str> = query
        .split('&')
        .map(|pair| pair.split_once('=').map_or(pair, |(key, _)| key))
        .collect();
    assert_eq!(keys, vec!["subject", "body"]);
    let parsed = MailtoLink::parse(&uri).unwrap();
    assert_eq!(parsed.subject, "Portfolio Inquiry from Eve&subject=Hijacked");
    assert!(parsed.body.contains("hello&subject=Free money&body=gotcha"));
}
