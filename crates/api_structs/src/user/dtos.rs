use parlo_domain::{User, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub name: String,
    pub surname: String,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name,
            surname: user.surname,
        }
    }
}
