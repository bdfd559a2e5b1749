use serde::Deserialize;

use super::Name;

/// Query string accepted by `GET /hello`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HelloQuery {
    #[serde(default)]
    pub name: Option<String>,
}

impl HelloQuery {
    /// `None` when the caller did not pass a name at all; an empty
    /// `name=` still yields `Some`.
    pub fn name(&self) -> Option<Name> {
        self.name.as_deref().map(Name::from)
    }
}
