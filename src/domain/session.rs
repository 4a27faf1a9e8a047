/// Who is driving a call into the admin-facing services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Admin,
}

/// Explicit session context passed at the call boundary.
///
/// Replaces ambient "am I admin" state: callers construct a session where
/// they authenticate and hand it to each operation that needs it. The
/// session lives exactly as long as the caller keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    role: Role,
}

impl Session {
    pub fn customer() -> Self {
        Self {
            role: Role::Customer,
        }
    }

    pub fn admin() -> Self {
        Self { role: Role::Admin }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
