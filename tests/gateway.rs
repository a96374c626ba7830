mod common;

use common::mock_server::{GatewayMock, PASSWORD, query_value};
use smsconnect::{
    DataCode, KnownErrorCode, MessageText, PhoneNumber, Sender, SenderId, Sms, SmsConnectError,
    SmsOptions, UserId, ValidationError,
};

fn sms(number: &str, text: &str) -> Sms {
    Sms::new(
        PhoneNumber::new(number).unwrap(),
        MessageText::new(text).unwrap(),
    )
}

#[tokio::test]
async fn test_send_sms_valid() {
    let mock = GatewayMock::start().await;
    mock.mount_action(
        "GET",
        "send_sms",
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<result><err>0</err><price>1.1</price><sms_count>1</sms_count><credit>98.9</credit><sms_id>377351</sms_id></result>",
        1,
    )
    .await;

    let options = SmsOptions {
        sender: Some(Sender::Id(SenderId::new("5").unwrap())),
        user_id: Some(UserId::new("order-42").unwrap()),
        data_code: Some(DataCode::SevenBit),
        ..Default::default()
    };
    let message = Sms::with_options(
        PhoneNumber::new("+420736339339").unwrap(),
        MessageText::new("Your order has shipped").unwrap(),
        options,
    );

    let client = mock.client();
    let response = client.send_sms(message).await.unwrap();

    assert!(response.is_success());
    assert_eq!(response.price(), Some("1.1"));
    assert_eq!(response.credit(), Some("98.9"));
    assert_eq!(response.sms_id(), Some("377351"));

    let requests = mock.received().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(
        query_value(request, "number").as_deref(),
        Some("+420736339339")
    );
    assert_eq!(
        query_value(request, "message").as_deref(),
        Some("Your order has shipped")
    );
    assert_eq!(query_value(request, "sender_id").as_deref(), Some("5"));
    assert_eq!(query_value(request, "user_id").as_deref(), Some("order-42"));
    assert_eq!(query_value(request, "data_code").as_deref(), Some("7bit"));
    assert_eq!(query_value(request, "when"), None);
    assert_eq!(query_value(request, "delivery_report"), None);
    assert!(!request.url.as_str().contains(PASSWORD));
}

#[tokio::test]
async fn test_send_sms_gateway_error_is_returned_not_raised() {
    let mock = GatewayMock::start().await;
    mock.mount_action("GET", "send_sms", "<result><err>10</err></result>", 1)
        .await;

    let client = mock.client();
    let response = client.send_sms(sms("123", "hello")).await.unwrap();

    assert!(!response.is_success());
    assert_eq!(response.err(), Some("Neplatné číslo příjemce SMS"));
    assert_eq!(
        response.error_code().and_then(|code| code.known()),
        Some(KnownErrorCode::InvalidRecipient)
    );
}

#[tokio::test]
async fn test_send_multiple_sms_posts_queue() {
    let mock = GatewayMock::start().await;
    mock.mount_action("POST", "xml_queue", "<result><err>0</err></result>", 1)
        .await;

    let client = mock.client();
    let response = client
        .send_multiple_sms(vec![
            sms("736339339", "first"),
            sms("736339340", "second & last"),
        ])
        .await
        .unwrap();
    assert!(response.is_success());

    let requests = mock.received().await;
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert_eq!(
        body,
        "<queue>\
         <sms><number>736339339</number><message>first</message></sms>\
         <sms><number>736339340</number><message>second &amp; last</message></sms>\
         </queue>"
    );
    assert_eq!(query_value(&requests[0], "number"), None);
}

#[tokio::test]
async fn test_send_multiple_sms_empty_is_rejected_locally() {
    let mock = GatewayMock::start().await;

    let client = mock.client();
    let err = client.send_multiple_sms(Vec::new()).await.unwrap_err();

    assert!(matches!(
        err,
        SmsConnectError::Validation(ValidationError::Empty { .. })
    ));
    assert!(mock.received().await.is_empty());
}

#[tokio::test]
async fn test_get_credit_status_insufficient_credit() {
    let mock = GatewayMock::start().await;
    mock.mount_action("GET", "credit_info", "<result><err>9</err></result>", 1)
        .await;

    let client = mock.client();
    let response = client.get_credit_status().await.unwrap();

    assert_eq!(response.err(), Some("Nedostatečný kredit"));
}

#[tokio::test]
async fn test_get_credit_status_unknown_code_passes_through() {
    let mock = GatewayMock::start().await;
    mock.mount_action("GET", "credit_info", "<result><err>99</err></result>", 1)
        .await;

    let client = mock.client();
    let response = client.get_credit_status().await.unwrap();

    assert_eq!(response.err(), Some("99"));
    assert!(response.error_code().unwrap().known().is_none());
}

#[tokio::test]
async fn test_get_accepted_messages() {
    let mock = GatewayMock::start().await;
    mock.mount_action(
        "GET",
        "inbox",
        r#"<result>
             <err>0</err>
             <inbox>
               <delivery_sms>
                 <item><number>+420736339339</number><time>20240301T101010</time><message>Ano</message></item>
               </delivery_sms>
               <delivery_report>
                 <item><idsms>377351</idsms><number>+420736339339</number><time>20240301T101500</time><status>1</status></item>
                 <item><idsms>377352</idsms><number>+420736339340</number><time>20240301T101600</time><status>2</status></item>
               </delivery_report>
             </inbox>
           </result>"#,
        1,
    )
    .await;

    let client = mock.client();
    let response = client.get_accepted_messages().await.unwrap();

    let received = response.received_messages();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].text("message"), Some("Ano"));

    let reports = response.delivery_reports();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1].text("idsms"), Some("377352"));
}

#[tokio::test]
async fn test_concurrent_calls_are_signed_independently() {
    let mock = GatewayMock::start().await;
    mock.mount_action("GET", "credit_info", "<result><err>0</err></result>", 3)
        .await;

    let client = mock.client();
    let (a, b, c) = tokio::join!(
        client.get_credit_status(),
        client.get_credit_status(),
        client.get_credit_status()
    );
    assert!(a.unwrap().is_success());
    assert!(b.unwrap().is_success());
    assert!(c.unwrap().is_success());

    let mut salts = mock
        .received()
        .await
        .iter()
        .filter_map(|request| query_value(request, "salt"))
        .collect::<Vec<_>>();
    salts.sort();
    salts.dedup();
    assert_eq!(salts.len(), 3);
}

#[tokio::test]
async fn test_http_error_status() {
    let mock = GatewayMock::start().await;
    mock.mount_status(502, "Bad Gateway").await;

    let client = mock.client();
    let err = client.get_credit_status().await.unwrap_err();

    assert!(matches!(
        err,
        SmsConnectError::HttpStatus { status: 502, .. }
    ));
}

#[tokio::test]
async fn test_malformed_xml_is_a_parse_error() {
    let mock = GatewayMock::start().await;
    mock.mount_status(200, "<result><err>0</result>").await;

    let client = mock.client();
    let err = client.get_credit_status().await.unwrap_err();

    assert!(matches!(err, SmsConnectError::Parse(_)));
}
