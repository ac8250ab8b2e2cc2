use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Worker {
    pub id: String, // WKR-001
    pub name: String,
    pub phone: String,
    pub badge: String, // B-001
    /// Manhole id of the session the worker is currently inside, if any.
    pub active_entry: Option<String>,
}

impl Worker {
    pub fn is_inside(&self) -> bool {
        self.active_entry.is_some()
    }
}
