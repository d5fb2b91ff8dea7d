/// Sections of the page, in nav order: `(id, label)`.
pub const SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("services", "Price list"),
    ("account", "Account"),
    ("admin", "Admin"),
];

pub const SERVICES_SECTION: &str = "services";

/// Tracks which nav link and content section are active.
///
/// Ids are not validated. Activating an unknown id leaves every link and
/// section inactive.
#[derive(Debug, Clone)]
pub struct Navigator {
    active: String,
}

impl Navigator {
    pub fn new(initial: &str) -> Self {
        Self {
            active: initial.to_string(),
        }
    }

    pub fn activate(&mut self, section: &str) {
        self.active = section.to_string();
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.active == section
    }

    pub fn is_known(section: &str) -> bool {
        SECTIONS.iter().any(|(id, _)| *id == section)
    }
}
