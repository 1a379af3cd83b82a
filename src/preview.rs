use std::fmt;

pub const HEAD_CHARS: usize = 10;
pub const TAIL_CHARS: usize = 5;
pub const SEPARATOR: &str = "...";

/// Redacted display form of a secret.
///
/// Values of at least `HEAD_CHARS + TAIL_CHARS` characters show their first
/// ten and last five characters. Anything shorter would reveal most or all of
/// the secret, so it is hidden entirely. Values that are not valid Unicode
/// cannot be sliced by character and are never shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Partial { head: String, tail: String },
    Hidden,
    NotUnicode,
}

impl Preview {
    pub fn of(value: &str) -> Self {
        let len = value.chars().count();
        if len < HEAD_CHARS + TAIL_CHARS {
            return Preview::Hidden;
        }

        let head = value.chars().take(HEAD_CHARS).collect();
        let tail = value.chars().skip(len - TAIL_CHARS).collect();
        Preview::Partial { head, tail }
    }

    pub fn is_hidden(&self) -> bool {
        !matches!(self, Preview::Partial { .. })
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preview::Partial { head, tail } => write!(f, "{}{}{}", head, SEPARATOR, tail),
            Preview::Hidden => write!(f, "(hidden, shorter than {} characters)", HEAD_CHARS + TAIL_CHARS),
            Preview::NotUnicode => write!(f, "(hidden, not valid Unicode)"),
        }
    }
}
