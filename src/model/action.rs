#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind {
    /// click, submit, wait-for
    Interaction { identifier: String },
    /// set
    Input { identifier: String, value: String },
    Wait { duration: String },
    /// back, forward, reload
    NoArguments,
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub source: String,
    pub action_type: String,
    pub arguments: String,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(source: &str, action_type: &str, arguments: &str, kind: ActionKind) -> Self {
        Self {
            source: source.to_string(),
            action_type: action_type.to_string(),
            arguments: arguments.to_string(),
            kind,
        }
    }

    pub fn interaction(source: &str, action_type: &str, arguments: &str, identifier: &str) -> Self {
        Self::new(
            source,
            action_type,
            arguments,
            ActionKind::Interaction {
                identifier: identifier.to_string(),
            },
        )
    }

    pub fn input(source: &str, arguments: &str, identifier: &str, value: &str) -> Self {
        Self::new(
            source,
            "set",
            arguments,
            ActionKind::Input {
                identifier: identifier.to_string(),
                value: value.to_string(),
            },
        )
    }

    /// Input actions are interactions that also carry a value.
    pub fn is_interaction(&self) -> bool {
        matches!(
            self.kind,
            ActionKind::Interaction { .. } | ActionKind::Input { .. }
        )
    }

    pub fn is_input(&self) -> bool {
        matches!(self.kind, ActionKind::Input { .. })
    }

    pub fn is_wait(&self) -> bool {
        matches!(self.kind, ActionKind::Wait { .. })
    }

    pub fn identifier(&self) -> Option<&str> {
        match &self.kind {
            ActionKind::Interaction { identifier } | ActionKind::Input { identifier, .. } => {
                Some(identifier)
            }
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            ActionKind::Input { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn duration(&self) -> Option<&str> {
        match &self.kind {
            ActionKind::Wait { duration } => Some(duration),
            _ => None,
        }
    }
}
