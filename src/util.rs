pub type ErrorType = Box<dyn std::error::Error + 'static>;
pub type Result<T> = std::result::Result<T, ErrorType>;

#[derive(Debug)]
pub struct Error {
    descr: String,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Error](descr:{})", &self.descr)?;
        Ok(())
    }
}
impl std::error::Error for Error {}

impl Error {
    pub fn create(descr: impl Into<String>) -> ErrorType {
        Box::new(Error {
            descr: descr.into(),
        })
    }
}

#[macro_export]
macro_rules! fail {
    ($fmt:expr) => {
        return Err($crate::util::Error::create(format!($fmt)))
    };
    ($fmt:expr, $($arg:expr),* $(,)?) => {
        return Err($crate::util::Error::create(format!($fmt, $($arg),*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(n: i32) -> Result<i32> {
        if n < 0 {
            fail!("Expected a positive number, got {}", n);
        }
        Ok(n)
    }

    #[test]
    fn test_fail() {
        assert_eq!(check(3).ok(), Some(3));
        let err = check(-1).unwrap_err();
        assert_eq!(
            format!("{}", err),
            "[Error](descr:Expected a positive number, got -1)"
        );
    }
}
