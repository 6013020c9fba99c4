use tokio::sync::mpsc;
use tracing::{error, info};

use crate::config::MailConfig;
use crate::types::mail::{InvitationEmail, SendEmail};
use crate::utils::mail::send_email;

/// Fire-and-forget outbound email. Handlers enqueue and move on; a single
/// spawned worker drains the channel. Delivery failure is logged and dropped,
/// never surfaced to the request that queued it.
#[derive(Clone)]
pub struct EmailQueue {
    tx: mpsc::UnboundedSender<InvitationEmail>,
}

impl EmailQueue {
    pub fn start(mail: MailConfig) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<InvitationEmail>();
        tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                deliver(&mail, job).await;
            }
        });
        Self { tx }
    }

    pub fn enqueue(&self, job: InvitationEmail) {
        if self.tx.send(job).is_err() {
            error!("email worker is gone, dropping invitation email");
        }
    }
}

async fn deliver(mail: &MailConfig, job: InvitationEmail) {
    let email = SendEmail {
        from: mail.from.clone(),
        to: vec![job.invited_email.clone()],
        subject: format!("Invitation to join {}", job.organization_name),
        html: Some(format!(
            "<p>Hi,</p>\
             <p>You have been invited by {inviter} to join the organization \
             <strong>{organization}</strong>.</p>\
             <p>Best regards,</p>",
            inviter = job.inviter_email,
            organization = job.organization_name,
        )),
        text: Some(format!(
            "You have been invited by {} to join the organization {}.",
            job.inviter_email, job.organization_name,
        )),
    };
    match send_email(mail, email).await {
        Ok(_) => info!("invitation email sent to {}", job.invited_email),
        Err(e) => error!("invitation email to {} failed: {e}", job.invited_email),
    }
}
