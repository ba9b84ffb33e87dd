use crate::shared::entity::{Entity, ID};

#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub surname: String,
}

impl User {
    pub fn new(name: &str, surname: &str) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            surname: surname.into(),
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}
