use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{target} has {}", absent(.names))]
pub struct MissingAttribute {
    pub target: String,
    pub names: Vec<String>,
}

impl MissingAttribute {
    pub fn new(target: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            names: vec![name.into()],
        }
    }

    pub fn of_all<I, S>(target: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            target: target.into(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this is the miss of exactly `name` on `target`.
    pub fn is_lookup_of(&self, target: &str, name: &str) -> bool {
        self.target == target && matches!(self.names.as_slice(), [only] if only == name)
    }

    /// Folds another miss on the same lookup into this one, keeping
    /// candidate order.
    pub fn absorb(mut self, other: MissingAttribute) -> Self {
        self.names.extend(other.names);
        self
    }
}

fn absent(names: &[String]) -> String {
    match names {
        [] => "no attributes".to_string(),
        [name] => format!("no attribute '{name}'"),
        _ => {
            let quoted: Vec<String> = names.iter().map(|n| format!("'{n}'")).collect();
            format!("none of the attributes {}", quoted.join(", "))
        }
    }
}
