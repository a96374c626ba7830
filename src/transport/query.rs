use crate::domain::{
    Action, DataCode, MessageText, PhoneNumber, SendAt, Sender, SenderId, Sms, SmsOptions, UserId,
};
use crate::transport::auth::format_gateway_time;

pub fn encode_action(action: Action) -> (String, String) {
    (Action::FIELD.to_owned(), action.as_str().to_owned())
}

/// Flat `(field, value)` pairs of a message, in wire order. Unset fields are skipped.
pub fn encode_sms_fields(sms: &Sms) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    params.push((PhoneNumber::FIELD.to_owned(), sms.number().raw().to_owned()));
    params.push((
        MessageText::FIELD.to_owned(),
        sms.message().as_str().to_owned(),
    ));
    push_options(&mut params, sms.options());
    params
}

fn push_options(params: &mut Vec<(String, String)>, options: &SmsOptions) {
    if let Some(when) = options.when {
        params.push((SendAt::FIELD.to_owned(), format_gateway_time(when.value())));
    }
    if let Some(delivery_report) = options.delivery_report {
        let value = if delivery_report { "1" } else { "0" };
        params.push((
            SmsOptions::DELIVERY_REPORT_FIELD.to_owned(),
            value.to_owned(),
        ));
    }
    match options.sender.as_ref() {
        Some(Sender::Id(id)) => params.push((SenderId::FIELD.to_owned(), id.as_str().to_owned())),
        Some(Sender::Phone(phone)) => {
            params.push((Sender::PHONE_FIELD.to_owned(), phone.raw().to_owned()));
        }
        None => {}
    }
    if let Some(user_id) = options.user_id.as_ref() {
        params.push((UserId::FIELD.to_owned(), user_id.as_str().to_owned()));
    }
    if let Some(data_code) = options.data_code {
        params.push((DataCode::FIELD.to_owned(), data_code.as_str().to_owned()));
    }
    if let Some(answer_mail) = options.answer_mail.as_ref() {
        params.push((
            SmsOptions::ANSWER_MAIL_FIELD.to_owned(),
            answer_mail.as_str().to_owned(),
        ));
    }
    if let Some(delivery_mail) = options.delivery_mail.as_ref() {
        params.push((
            SmsOptions::DELIVERY_MAIL_FIELD.to_owned(),
            delivery_mail.as_str().to_owned(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::domain::Email;

    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_owned(), value.to_owned())
    }

    #[test]
    fn required_fields_only_when_options_unset() {
        let sms = Sms::new(
            PhoneNumber::new("736339339").unwrap(),
            MessageText::new("hello").unwrap(),
        );
        assert_eq!(
            encode_sms_fields(&sms),
            vec![pair("number", "736339339"), pair("message", "hello")]
        );
    }

    #[test]
    fn every_set_option_is_encoded_in_wire_order() {
        let options = SmsOptions {
            when: Some(SendAt::new(datetime!(2024-12-24 16:00 UTC))),
            delivery_report: Some(false),
            sender: Some(Sender::Id(SenderId::new("7").unwrap())),
            user_id: Some(UserId::new("order-1234").unwrap()),
            data_code: Some(DataCode::Ucs2),
            answer_mail: Some(Email::new("replies@example.com").unwrap()),
            delivery_mail: Some(Email::new("receipts@example.com").unwrap()),
        };
        let sms = Sms::with_options(
            PhoneNumber::new("+420736339339").unwrap(),
            MessageText::new("Veselé Vánoce").unwrap(),
            options,
        );

        assert_eq!(
            encode_sms_fields(&sms),
            vec![
                pair("number", "+420736339339"),
                pair("message", "Veselé Vánoce"),
                pair("when", "20241224T180000"),
                pair("delivery_report", "0"),
                pair("sender_id", "7"),
                pair("user_id", "order-1234"),
                pair("data_code", "ucs2"),
                pair("answer_mail", "replies@example.com"),
                pair("delivery_mail", "receipts@example.com"),
            ]
        );
    }

    #[test]
    fn sender_phone_uses_its_own_field() {
        let options = SmsOptions {
            sender: Some(Sender::Phone(PhoneNumber::new("736000111").unwrap())),
            delivery_report: Some(true),
            ..Default::default()
        };
        let sms = Sms::with_options(
            PhoneNumber::new("736339339").unwrap(),
            MessageText::new("hi").unwrap(),
            options,
        );

        let params = encode_sms_fields(&sms);
        assert!(params.contains(&pair("sender_phone", "736000111")));
        assert!(params.contains(&pair("delivery_report", "1")));
        assert!(!params.iter().any(|(k, _)| k == "sender_id"));
    }

    #[test]
    fn action_pair() {
        assert_eq!(encode_action(Action::Inbox), pair("action", "inbox"));
    }
}
