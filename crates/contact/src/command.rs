mod submit_form;

use std::sync::Arc;

pub use submit_form::*;

use crate::{MailSender, Operator};

/// Submission handler for the contact form.
///
/// Stateless apart from the injected mail sender and operator identity,
/// so clones can serve concurrent requests.
#[derive(Clone)]
pub struct Command {
    pub sender: Arc<dyn MailSender>,
    pub operator: Operator,
}

impl Command {
    pub fn new(sender: impl MailSender + 'static, operator: Operator) -> Self {
        Self {
            sender: Arc::new(sender),
            operator,
        }
    }
}
