//! Email service for contact-form confirmations and notifications

use lettre::{
    message::{header::ContentType, Mailbox, Message, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    SmtpTransport, Transport,
};
use std::str::FromStr;

use crate::{
    config::EmailConfig,
    error::{AppError, AppResult},
    models::contact::Contact,
};

#[derive(Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Confirmation sent to the person who submitted the contact form
    pub async fn send_contact_confirmation(&self, contact: &Contact) -> AppResult<()> {
        let subject = format!("We received your message - {}", contact.subject);
        let body = format!(
            r#"
Hi {name},

Thank you for reaching out to us! We've received your message and our team
will get back to you within 24 hours.

Your message details:
Subject: {subject}
Category: {category}

{message}

Best regards,
The Wayfarer Team
"#,
            name = contact.name,
            subject = contact.subject,
            category = contact.category.label(),
            message = contact.message,
        );

        self.send_email(&contact.email, &subject, &body).await
    }

    /// Notification sent to the support inbox for every new submission
    pub async fn send_admin_notification(&self, contact: &Contact) -> AppResult<()> {
        let subject = format!("New Contact Form Submission - {}", contact.subject);
        let body = format!(
            r#"
New contact submission:

Name: {name}
Email: {email}
Phone: {phone}
Subject: {subject}
Category: {category}
Newsletter: {newsletter}

Message:
{message}
"#,
            name = contact.name,
            email = contact.email,
            phone = contact.phone.as_deref().unwrap_or("Not provided"),
            subject = contact.subject,
            category = contact.category.label(),
            newsletter = if contact.newsletter { "Yes" } else { "No" },
            message = contact.message,
        );

        for recipient in &self.config.admin_recipients {
            self.send_email(recipient, &subject, &body).await?;
        }

        Ok(())
    }

    /// Generic email sending function
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let from_name = self
            .config
            .smtp_from_name
            .as_deref()
            .unwrap_or("Wayfarer");
        let from_mailbox = Mailbox::from_str(&format!("{} <{}>", from_name, self.config.smtp_from))
            .map_err(|e| AppError::Internal(format!("Invalid from address: {}", e)))?;

        let to_mailbox = Mailbox::from_str(to)
            .map_err(|e| AppError::Internal(format!("Invalid to address: {}", e)))?;

        let email = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(format!(
                                r#"<html><body><pre>{}</pre></body></html>"#,
                                body.replace('\n', "<br>")
                            )),
                    ),
            )
            .map_err(|e| AppError::Internal(format!("Failed to build email: {}", e)))?;

        let mailer_builder = if self.config.smtp_use_tls {
            SmtpTransport::starttls_relay(&self.config.smtp_host)
                .map_err(|e| AppError::Internal(format!("Failed to create SMTP transport: {}", e)))?
        } else {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
        }
        .port(self.config.smtp_port);

        let mailer_builder = if let (Some(username), Some(password)) = (
            &self.config.smtp_username,
            &self.config.smtp_password,
        ) {
            mailer_builder.credentials(Credentials::new(username.clone(), password.clone()))
        } else {
            mailer_builder
        };

        let mailer = mailer_builder.build();

        mailer
            .send(&email)
            .map_err(|e| AppError::Internal(format!("Failed to send email: {}", e)))?;

        Ok(())
    }
}
