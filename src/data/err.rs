#[macro_export]
macro_rules! unwrap_or_return_some_err {
    ($expression:expr) => {
        match $expression {
            Ok(v) => v,
            Err(e) => return Some(Err(e)),
        }
    };
}

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

#[cfg(test)]
mod test {
    use super::GetCode;
    use std::io::{Error, ErrorKind};

    #[test]
    fn io_error_codes() {
        assert_eq!(Error::from_raw_os_error(2).get_code(), 2);
        assert_eq!(Error::new(ErrorKind::InvalidInput, "file empty").get_code(), 1);
    }
}
