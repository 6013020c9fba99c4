use serde::Serialize;

#[derive(Serialize)]
pub struct SendEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: Option<String>,
    pub text: Option<String>,
}

/// Fire-and-forget invitation job handed to the email queue.
#[derive(Debug, Clone)]
pub struct InvitationEmail {
    pub organization_name: String,
    pub invited_email: String,
    pub inviter_email: String,
}
