//! Fixed page copy: FAQ entries, contact form fields, and notification texts.

use serde::Serialize;

use crate::Notification;

/// One question/answer pair of the FAQ accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

/// FAQ entries in display order.
pub const FAQ_ENTRIES: [FaqEntry; 4] = [
    FaqEntry {
        id: "item-1",
        question: "What is the maximum video length?",
        answer: "Our AI can create videos up to 1 hour long with realistic imagery and smooth motion.",
    },
    FaqEntry {
        id: "item-2",
        question: "How long does generation take?",
        answer: "5-15 minutes on average, depending on length. Clips under a minute are ready in 2-3 minutes.",
    },
    FaqEntry {
        id: "item-3",
        question: "What quality are the videos?",
        answer: "Every video is generated in Full HD (1920x1080) and can be upscaled to 4K. The frame rate is 30 FPS.",
    },
    FaqEntry {
        id: "item-4",
        question: "Can I edit a finished video?",
        answer: "Yes! After generation you can change the description of individual scenes and regenerate them without losing the rest of the footage.",
    },
];

/// Input control used to render a contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

impl FieldKind {
    /// Value of the `type` attribute for `<input>` controls.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::TextArea => "text",
            FieldKind::Email => "email",
        }
    }
}

/// A contact form field, mirrored by the browser's native constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactField {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

pub const NAME_FIELD: ContactField = ContactField {
    id: "name",
    label: "Name",
    placeholder: "Your name",
    kind: FieldKind::Text,
    required: true,
};

pub const EMAIL_FIELD: ContactField = ContactField {
    id: "email",
    label: "Email",
    placeholder: "your@email.com",
    kind: FieldKind::Email,
    required: true,
};

pub const MESSAGE_FIELD: ContactField = ContactField {
    id: "message",
    label: "Message",
    placeholder: "Your question or proposal...",
    kind: FieldKind::TextArea,
    required: true,
};

pub const CONTACT_FIELDS: [ContactField; 3] = [NAME_FIELD, EMAIL_FIELD, MESSAGE_FIELD];

/// Shown when the prompt form is submitted with a blank description.
pub fn blank_prompt_notice() -> Notification {
    Notification::destructive(
        "Enter a description",
        "Describe the video you want to create",
    )
}

/// Shown when a simulated generation cycle finishes.
pub fn video_ready_notice() -> Notification {
    Notification::new(
        "Video ready! 🎬",
        "Your realistic video was generated successfully",
    )
}

/// Shown after the contact form is submitted.
pub fn message_sent_notice() -> Notification {
    Notification::new("Message sent! ✉️", "We will get back to you shortly")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NotificationVariant;

    #[test]
    fn faq_has_four_entries_with_unique_ids() {
        let mut ids: Vec<_> = FAQ_ENTRIES.iter().map(|e| e.id).collect();
        ids.dedup();
        assert_eq!(ids, vec!["item-1", "item-2", "item-3", "item-4"]);
        assert!(FAQ_ENTRIES.iter().all(|e| !e.question.is_empty() && !e.answer.is_empty()));
    }

    #[test]
    fn every_contact_field_is_required() {
        assert!(CONTACT_FIELDS.iter().all(|f| f.required));
        assert_eq!(EMAIL_FIELD.kind.input_type(), "email");
        assert_eq!(MESSAGE_FIELD.kind.input_type(), "text");
    }

    #[test]
    fn notice_variants() {
        assert_eq!(blank_prompt_notice().variant, NotificationVariant::Destructive);
        assert_eq!(video_ready_notice().variant, NotificationVariant::Default);
        assert_eq!(message_sent_notice().variant, NotificationVariant::Default);
    }
}
