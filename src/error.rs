use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, covering every error this library can return.
///
/// The output sink itself never fails: unrecognized attachments, mismatched tokens and
/// invalid sub-ranges are silently dropped. Errors only surface from the byte-level
/// readers used to derive method facts, such as [`crate::metadata::method::MethodBody::from`].
///
/// # Examples
///
/// ```rust
/// use dotscope_output::{metadata::method::MethodBody, Error};
///
/// match MethodBody::from(&[]) {
///     Ok(body) => println!("{} bytes of IL", body.size_code),
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("Malformed body: {} ({}:{})", message, file, line);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The input is damaged and could not be parsed.
    ///
    /// Carries the source location where the malformation was detected.
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while reading the input.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_macro_records_location() {
        let err = malformed_error!("bad header - {}", 7);
        match err {
            Error::Malformed {
                message,
                file,
                line,
            } => {
                assert_eq!(message, "bad header - 7");
                assert!(file.ends_with("error.rs"));
                assert!(line > 0);
            }
            Error::OutOfBounds => panic!("expected Malformed"),
        }
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::OutOfBounds.to_string(),
            "Out of Bound read would have occurred!"
        );
        let text = malformed_error!("empty").to_string();
        assert!(text.starts_with("Malformed - "));
        assert!(text.ends_with(": empty"));
    }
}
