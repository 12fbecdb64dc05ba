/// Registered identity. Keyed by email; the password digest lives only in
/// the [`Registry`](crate::Registry) and is never part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Member {
    email: String,
    name: String,
    phone: String,
}

impl Member {
    pub fn new(email: String, name: String, phone: String) -> Self {
        Self { email, name, phone }
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl std::fmt::Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
