use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RSignup {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserRes {
    pub name: String,
    pub email: String,
}

pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
