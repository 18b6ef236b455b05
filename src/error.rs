#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A required source or function was not supplied.
    #[error("Missing required argument `{name}`.")]
    InvalidArgument { name: &'static str },

    #[error("Index {index} is out of range for a list of length {len}.")]
    OutOfRange { index: usize, len: usize },
}

impl Error {
    pub fn new_invalid_argument(name: &'static str) -> Self {
        Error::InvalidArgument { name }
    }

    pub fn new_out_of_range(index: usize, len: usize) -> Self {
        Error::OutOfRange { index, len }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            Error::new_invalid_argument("predicate").to_string(),
            "Missing required argument `predicate`."
        );
        assert_eq!(
            Error::new_out_of_range(3, 0).to_string(),
            "Index 3 is out of range for a list of length 0."
        );
    }
}
