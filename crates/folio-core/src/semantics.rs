/// High‑level semantic role of a view, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Text,
    Button,
    Link,
    TextField,
    Container,
    Navigation,
    Dialog,
    Status,
    ProgressBar,
}

impl Role {
    /// ARIA role name, when the role is not implied by the element itself.
    pub fn aria(&self) -> Option<&'static str> {
        match self {
            Role::Navigation => Some("navigation"),
            Role::Dialog => Some("dialog"),
            Role::Status => Some("status"),
            Role::ProgressBar => Some("progressbar"),
            _ => None,
        }
    }
}

/// Semantics attached to a `View`, used for accessible labels and roles.
#[derive(Clone, Debug)]
pub struct Semantics {
    /// Primary role of this node (what kind of thing it is).
    pub role: Role,
    /// Human‑readable label for screen readers. For icon-only links this is
    /// the only name that is announced.
    pub label: Option<String>,
    /// Whether this node is actionable; disabled nodes remain in the tree
    /// but are marked not enabled.
    pub enabled: bool,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            enabled: true,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
