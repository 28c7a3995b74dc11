use std::fmt;

#[derive(Debug)]
pub enum ExpandError {
    ValueParse(String),
    Generate(String),
    InvalidConfiguration(String),
    Io(std::io::Error),
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandError::ValueParse(message) => write!(f, "value parse error: {}", message),
            ExpandError::Generate(message) => {
                write!(f, "value cannot be serialized: {}", message)
            }
            ExpandError::InvalidConfiguration(message) => {
                write!(f, "invalid configuration: {}", message)
            }
            ExpandError::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for ExpandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExpandError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExpandError {
    fn from(value: std::io::Error) -> Self {
        ExpandError::Io(value)
    }
}
