use std::fmt;

/// Statement operations understood by the executor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Set,
    Sub,
    Print,
    Rem,
}

impl Operation {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "set" => Some(Self::Set),
            "sub" => Some(Self::Sub),
            "print" => Some(Self::Print),
            "rem" => Some(Self::Rem),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Sub => "sub",
            Self::Print => "print",
            Self::Rem => "rem",
        }
    }
}

/// One statement parsed from a source line, consumed once by the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<op> <var>`
    Plain {
        op: Operation,
        variable: String,
        line: usize,
    },
    /// `<op> <var> <int>`
    WithValue {
        op: Operation,
        variable: String,
        value: i64,
        line: usize,
    },
}

impl Command {
    pub fn op(&self) -> Operation {
        match self {
            Self::Plain { op, .. } | Self::WithValue { op, .. } => *op,
        }
    }

    pub fn variable(&self) -> &str {
        match self {
            Self::Plain { variable, .. } | Self::WithValue { variable, .. } => variable,
        }
    }

    /// Source line the command was parsed from
    pub fn line(&self) -> usize {
        match self {
            Self::Plain { line, .. } | Self::WithValue { line, .. } => *line,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain { op, variable, .. } => write!(f, "{} {}", op.keyword(), variable),
            Self::WithValue {
                op,
                variable,
                value,
                ..
            } => write!(f, "{} {} {}", op.keyword(), variable, value),
        }
    }
}

/// What a single source line asks the engine to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Definition { name: String },
    Call { name: String },
    Statement(Command),
}
