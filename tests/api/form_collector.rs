use crate::helpers::{spawn_app, spawn_app_without_credential};
use std::time::Duration;
use vp_logistics::form_collector::{ContactForm, FormCollector, FormStatus, QuoteForm};
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

fn fill_contact(collector: &mut FormCollector<ContactForm>) {
    let record = collector.record_mut();
    record.first_name = "Jane".into();
    record.last_name = "Doe".into();
    record.email = "jane@x.com".into();
    record.company = "Acme".into();
    record.message = "Hello".into();
}

fn fill_quote(collector: &mut FormCollector<QuoteForm>) {
    let record = collector.record_mut();
    record.name = "Jane Doe".into();
    record.email = "jane@x.com".into();
    record.phone = "555-1234".into();
    record.company = "Acme".into();
    record.service_type = "last-mile".into();
    record.pickup_location = "A".into();
    record.delivery_location = "B".into();
    record.package_details = "2 boxes".into();
    record.estimated_volume = "50/day".into();
}

#[tokio::test]
async fn a_successful_contact_submission_clears_the_record() {
    let app = spawn_app().await;
    let mut collector = FormCollector::<ContactForm>::new(&app.address);
    fill_contact(&mut collector);

    let status = collector.submit().await.unwrap();

    assert_eq!(status, FormStatus::Success);
    assert_eq!(collector.status(), FormStatus::Success);
    assert_eq!(collector.record(), &ContactForm::default());
    assert!(collector.is_open());
}

#[tokio::test]
async fn a_rejected_submission_keeps_the_record() {
    let app = spawn_app().await;
    let mut collector = FormCollector::<ContactForm>::new(&app.address);
    fill_contact(&mut collector);
    collector.record_mut().email = "not-an-email".into();

    let status = collector.submit().await.unwrap();

    assert_eq!(status, FormStatus::Error);
    assert_eq!(collector.record().email, "not-an-email");
    assert_eq!(collector.record().first_name, "Jane");
}

#[tokio::test]
async fn an_unreachable_server_is_an_error() {
    let mut collector = FormCollector::<ContactForm>::new("http://127.0.0.1:1");
    fill_contact(&mut collector);

    let status = collector.submit().await.unwrap();

    assert_eq!(status, FormStatus::Error);
    assert_eq!(collector.record().company, "Acme");
}

#[tokio::test]
async fn a_successful_quote_is_dismissed_after_the_delay() {
    let app = spawn_app_without_credential().await;
    let mut collector = FormCollector::<QuoteForm>::new(&app.address)
        .with_dismiss_delay(Some(Duration::from_millis(10)));
    fill_quote(&mut collector);

    let status = collector.submit().await.unwrap();

    assert_eq!(status, FormStatus::Success);
    assert_eq!(collector.status(), FormStatus::Idle);
    assert!(!collector.is_open());
    assert_eq!(collector.record(), &QuoteForm::default());

    collector.reset();
    assert!(collector.is_open());
}

#[tokio::test]
async fn a_quote_is_submitted_once_even_if_delivery_fails() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;
    let mut collector = FormCollector::<QuoteForm>::new(&app.address).with_dismiss_delay(None);
    fill_quote(&mut collector);

    let status = collector.submit().await.unwrap();

    assert_eq!(status, FormStatus::Success);
    assert_eq!(collector.status(), FormStatus::Success);
}

#[tokio::test]
async fn an_error_can_be_reset_to_idle() {
    let mut collector = FormCollector::<QuoteForm>::new("http://127.0.0.1:1");
    fill_quote(&mut collector);
    collector.submit().await.unwrap();
    assert_eq!(collector.status(), FormStatus::Error);

    collector.reset();

    assert_eq!(collector.status(), FormStatus::Idle);
    assert_eq!(collector.record().name, "Jane Doe");
}

#[tokio::test]
async fn a_request_that_outlives_the_timeout_is_an_error() {
    let email_server = wiremock::MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
        .mount(&email_server)
        .await;
    let mut collector = FormCollector::<ContactForm>::new(&email_server.uri())
        .with_request_timeout(Duration::from_millis(200));
    fill_contact(&mut collector);

    let status = collector.submit().await.unwrap();

    assert_eq!(status, FormStatus::Error);
    assert_eq!(collector.record().first_name, "Jane");
}
