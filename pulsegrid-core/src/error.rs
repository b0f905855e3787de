use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The population array could not be allocated.
    Alloc,
    /// The configured counts do not form a valid population shape.
    InvalidConfiguration(&'static str),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Alloc => write!(f, "allocation error"),
            GridError::InvalidConfiguration(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

pub type GridResult<T, E = GridError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(format!("{}", GridError::Alloc), "allocation error");
        assert_eq!(
            format!("{}", GridError::InvalidConfiguration("bad")),
            "invalid configuration: bad"
        );
    }

    #[test]
    fn result_round_trip() {
        fn may_fail(ok: bool) -> GridResult<u32> {
            if ok { Ok(7) } else { Err(GridError::InvalidConfiguration("fail")) }
        }
        assert_eq!(may_fail(true).unwrap(), 7);
        assert!(may_fail(false).is_err());
    }
}
