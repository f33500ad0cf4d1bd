//! Fixture data for the demo pages

/// A contact row
#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: String,
}

/// An admin-managed user account
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: String,
}

fn contact(id: &str, name: &str, company: &str, email: &str) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        email: email.to_string(),
    }
}

fn user(id: &str, name: &str, role: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
    }
}

pub fn contacts() -> Vec<Contact> {
    vec![
        contact("c-101", "Ada Whitfield", "Northwind Freight", "ada@northwind.example"),
        contact("c-102", "Bastian Oyelaran", "Harbor Analytics", "bastian@harbor.example"),
        contact("c-103", "Chen Ruoxi", "Larkspur Labs", "ruoxi@larkspur.example"),
        contact("c-104", "Dalia Marquez", "Northwind Freight", "dalia@northwind.example"),
        contact("c-105", "Emeka Hart", "Quarry & Vale", "emeka@quarryvale.example"),
    ]
}

pub fn find_contact(id: &str) -> Option<Contact> {
    contacts().into_iter().find(|c| c.id == id)
}

pub fn users() -> Vec<User> {
    vec![
        user("u-1", "Morgan Reyes", "Administrator"),
        user("u-2", "Priya Natarajan", "Editor"),
        user("u-3", "Tomasz Lewandowski", "Viewer"),
    ]
}
