//! Contact form forwarding and the static outbound links.
//!
//! Nothing here talks to the network: the caller opens the returned URLs in
//! a new browsing context and never reads a response.

use serde::{Deserialize, Serialize};

use crate::config;

/// What the visitor typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl ContactInquiry {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    /// The inquiry as it appears in the chat, with WhatsApp bold markers.
    pub fn message_text(&self) -> String {
        format!(
            "*New Inquiry via Website*\n\n*Name:* {}\n*Phone:* {}\n*Requirement:* {}",
            self.name, self.phone, self.message
        )
    }

    /// Deep link that opens a chat with the shop, prefilled with the inquiry.
    pub fn whatsapp_link(&self) -> String {
        self.whatsapp_link_for(config::WHATSAPP_NUMBER)
    }

    /// Deep link to an arbitrary WhatsApp number (digits only, country code
    /// first).
    pub fn whatsapp_link_for(&self, phone: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            phone,
            urlencoding::encode(&self.message_text())
        )
    }
}

/// Links in the bottom bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutboundLink {
    WhatsApp,
    Maps,
    Instagram,
}

impl OutboundLink {
    pub const ALL: [OutboundLink; 3] = [
        OutboundLink::WhatsApp,
        OutboundLink::Maps,
        OutboundLink::Instagram,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OutboundLink::WhatsApp => "Chat",
            OutboundLink::Maps => "Map",
            OutboundLink::Instagram => "Insta",
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            OutboundLink::WhatsApp => config::WHATSAPP_URL,
            OutboundLink::Maps => config::MAPS_URL,
            OutboundLink::Instagram => config::INSTAGRAM_URL,
        }
    }
}
