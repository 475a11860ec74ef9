//! Contact form → WhatsApp deep link.

use dom::{Dom, EventListener, EventTargetMap, NodeId};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{debug, warn};

use crate::config::ContactConfig;
use crate::effects::{Effect, Outbox};

pub const MISSING_FIELDS_ALERT: &str = "Preencha pelo menos Nome e Telefone antes de enviar.";

const EMPTY_MESSAGE: &str = "—";

/// Everything except the characters `encodeURIComponent` leaves as-is.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("name is required")]
    MissingName,
    #[error("phone is required")]
    MissingPhone,
}

/// Trimmed values of the contact form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl ContactDetails {
    pub fn new(name: &str, phone: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Read `name`, `phone` (inputs) and `message` (textarea) from `form` by
    /// their `name` attribute. Missing fields read as empty.
    pub fn from_form(dom: &Dom, form: NodeId) -> Self {
        let field = |tag: &str, name: &str| -> String {
            dom.select(form, |e| e.tag_name == tag && e.attr("name") == Some(name))
                .first()
                .and_then(|&node| dom.attribute(node, "value"))
                .unwrap_or_default()
                .to_string()
        };
        Self::new(
            &field("input", "name"),
            &field("input", "phone"),
            &field("textarea", "message"),
        )
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if self.phone.is_empty() {
            return Err(ContactError::MissingPhone);
        }
        Ok(())
    }

    /// The pre-filled chat message.
    pub fn message_text(&self) -> String {
        let message = if self.message.is_empty() {
            EMPTY_MESSAGE
        } else {
            self.message.as_str()
        };
        format!(
            "Olá! Gostaria de agendar uma consulta.\n\n \
             *Nome:* {}\n \
             *Telefone:* {}\n \
             *Mensagem:* {}\n\n\
             Enviado através do site.",
            self.name, self.phone, message
        )
    }
}

/// `https://wa.me/<number>?text=<message>` for validated details.
pub fn whatsapp_url(number: &str, details: &ContactDetails) -> Result<String, ContactError> {
    details.validate()?;
    Ok(format!(
        "https://wa.me/{number}?text={}",
        utf8_percent_encode(&details.message_text(), URI_COMPONENT)
    ))
}

/// Wire the WhatsApp button. Returns `false` if the page lacks the button or
/// the form.
pub fn install(
    dom: &Dom,
    targets: &mut EventTargetMap,
    config: &ContactConfig,
    outbox: &Outbox,
) -> bool {
    let button = dom.get_element_by_id(&config.button_id);
    let form = dom.get_element_by_id(&config.form_id);
    let (Some(button), Some(form)) = (button, form) else {
        debug!(
            button = %config.button_id,
            form = %config.form_id,
            "contact link not wired"
        );
        return false;
    };

    let number = config.whatsapp_number.clone();
    let outbox = outbox.clone();
    targets.add_listener(
        button,
        EventListener::bubble("click", move |dom, _| {
            let details = ContactDetails::from_form(dom, form);
            match whatsapp_url(&number, &details) {
                Ok(url) => outbox.push(Effect::OpenUrl(url)),
                Err(err) => {
                    warn!(%err, "contact form incomplete");
                    outbox.push(Effect::Alert(MISSING_FIELDS_ALERT.to_string()));
                }
            }
        }),
    );
    true
}
