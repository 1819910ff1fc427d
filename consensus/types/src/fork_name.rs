use std::fmt;
use std::str::FromStr;

/// The closed set of fork schemas this node can process. Containers are
/// decoded and dispatched by fork name exactly once, at the orchestrator
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForkName {
    Deneb,
}

impl ForkName {
    pub fn list_all() -> Vec<ForkName> {
        vec![ForkName::Deneb]
    }
}

impl FromStr for ForkName {
    type Err = String;

    fn from_str(fork_name: &str) -> Result<Self, String> {
        Ok(match fork_name.to_lowercase().as_str() {
            "deneb" => ForkName::Deneb,
            _ => return Err(format!("unknown fork name: {}", fork_name)),
        })
    }
}

impl fmt::Display for ForkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForkName::Deneb => "deneb".fmt(f),
        }
    }
}
