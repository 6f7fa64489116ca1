use crate::error::EncodingError;
use crate::ticket::TicketRecord;
use serde::{Deserialize, Serialize};

/// The identity record embedded in a ticket's QR code.
///
/// Only the ticket id and the purchaser's email are carried, so venue-side
/// verification can look the ticket up without trusting anything else printed
/// on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScannablePayload {
    pub ticket_id: String,
    pub email: String,
}

impl ScannablePayload {
    pub fn from_ticket(ticket: &TicketRecord) -> Self {
        Self {
            ticket_id: ticket.id.clone(),
            email: ticket.email.clone(),
        }
    }

    /// Canonical text form encoded into the QR symbol.
    pub fn to_json(&self) -> Result<String, EncodingError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses the text read back from a scanned code.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
