use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct ROrganizationCreate {
    pub name: String,
    pub description: String,
}

// Allow-listed mutable fields. Anything else in the payload is ignored by serde,
// never assigned.
#[derive(Serialize, Deserialize, Debug)]
pub struct ROrganizationUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ROrganizationInvite {
    pub user_email: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MemberRes {
    pub name: String,
    pub email: String,
    pub access_level: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct OrganizationRes {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub members: Vec<MemberRes>,
}
