use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A project skeleton offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    RestApi,
    GraphQl,
}

/// Identifier and source repository for every [`Template`], in the order they
/// are offered. The first entry is the default.
static REGISTRY: [(Template, &str, Option<&str>); 2] = [
    (
        Template::RestApi,
        "RestAPI",
        Some("https://github.com/djibril6/restapi-nodejs-boilerplate.git"),
    ),
    (Template::GraphQl, "graphQL", None),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template \"{0}\"")]
pub struct UnknownTemplate(pub String);

impl Template {
    /// All templates in registry order.
    #[must_use]
    pub fn all() -> Vec<Template> {
        REGISTRY.iter().map(|&(t, _, _)| t).collect()
    }

    /// The template used when none is given.
    #[must_use]
    pub fn first() -> Template {
        REGISTRY[0].0
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    /// Repository to clone, or [`None`] if the template is not available yet.
    #[must_use]
    pub fn repository(self) -> Option<&'static str> {
        self.entry().2
    }

    fn entry(self) -> &'static (Template, &'static str, Option<&'static str>) {
        let row = match self {
            Template::RestApi => 0,
            Template::GraphQl => 1,
        };
        &REGISTRY[row]
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .iter()
            .find(|(_, name, _)| *name == s)
            .map(|&(t, _, _)| t)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}
