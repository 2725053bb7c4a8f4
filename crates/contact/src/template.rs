use askama::Template;
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{ContactError, Email, Operator, SubmitFormInput};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second] UTC");

#[derive(Template)]
#[template(path = "emails/contact-submission.html")]
struct ContactSubmissionHtmlTemplate<'a> {
    input: &'a SubmitFormInput,
    owner_name: &'a str,
    date: &'a str,
    time: &'a str,
}

#[derive(Template)]
#[template(path = "emails/contact-submission.txt")]
struct ContactSubmissionTextTemplate<'a> {
    input: &'a SubmitFormInput,
    date: &'a str,
    time: &'a str,
}

/// Build the notification sent to the site owner for one submission.
///
/// `sent_at` is the handler's clock, never a client supplied time.
pub fn render_email(
    operator: &Operator,
    input: &SubmitFormInput,
    sent_at: OffsetDateTime,
) -> Result<Email, ContactError> {
    let sent_at = sent_at.to_offset(time::UtcOffset::UTC);
    let date = sent_at.format(DATE_FORMAT)?;
    let time = sent_at.format(TIME_FORMAT)?;

    let html = ContactSubmissionHtmlTemplate {
        input,
        owner_name: &operator.owner_name,
        date: &date,
        time: &time,
    }
    .render()?;

    let plain = ContactSubmissionTextTemplate {
        input,
        date: &date,
        time: &time,
    }
    .render()?;

    Ok(Email {
        from: operator.from_address.to_owned(),
        to: operator.contact_address.to_owned(),
        reply_to: Some(input.email.to_owned()),
        subject: format!(
            "New Contact Form Submission from {} {}",
            input.first_name, input.last_name
        ),
        html,
        plain,
    })
}
