use super::Detail;
use crate::codec::{CAUSE_MARKER, STACK_MARKER};
use std::fmt::{self, Display};

impl Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}: {}", CAUSE_MARKER, self.cause(), STACK_MARKER, self.stack)
    }
}

impl std::error::Error for Detail {}

impl From<Detail> for String {
    #[inline]
    fn from(detail: Detail) -> Self {
        detail.to_string()
    }
}
