pub const FROM_NAME: &str = "AromaIQ";

pub const WELCOME_SUBJECT: &str = "Welcome to AromaIQ - You're on the Waitlist! 🌿";

/// Variables handed to the transactional email template.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WelcomeEmail {
    pub to_email: String,
    pub to_name: String,
    pub from_name: String,
    pub subject: String,
    pub message: String,
}

impl WelcomeEmail {
    pub fn new(to_email: &str, to_name: &str) -> Self {
        Self {
            to_email: to_email.to_string(),
            to_name: to_name.to_string(),
            from_name: FROM_NAME.to_string(),
            subject: WELCOME_SUBJECT.to_string(),
            message: welcome_text(to_name),
        }
    }
}

/// Plain-text body of the welcome letter.
pub fn welcome_text(name: &str) -> String {
    format!(
        r#"Welcome to AromaIQ, {name}!

Thank you for joining our waitlist! We're thrilled to have you on this journey with us.

AromaIQ is revolutionizing the way people experience aromatherapy by blending smart technology with natural wellness. Our intelligent diffuser adapts to your mood, preferences, and lifestyle to create the perfect aromatic environment.

What's Next?
• You'll be among the first to know when we launch
• Exclusive early-bird pricing for waitlist members
• Behind-the-scenes updates on our development
• Priority access to our beta program

We'll keep you updated with exciting news and developments. In the meantime, feel free to follow us on social media for the latest updates!

Stay fresh,
The AromaIQ Team

---
You're receiving this email because you joined the AromaIQ waitlist."#
    )
}
