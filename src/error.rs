use thiserror::Error;

macro_rules! malformed_error {
    // Single string version, with inline captures
    ($msg:expr) => {
        crate::Error::Malformed {
            message: format!($msg),
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

macro_rules! invalid_value_error {
    ($msg:expr) => {
        crate::Error::InvalidValue(format!($msg))
    };

    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidValue(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all error conditions that can occur while deserializing, editing, and
/// reserializing EXIF metadata. Each variant provides specific context about the failure mode
/// to enable appropriate error handling.
///
/// # Error Categories
///
/// ## Wire Format Errors
/// - [`Error::Malformed`] - Corrupted or invalid EXIF structure
/// - [`Error::OutOfBounds`] - A range reference outside the available EXIF buffer
/// - [`Error::Empty`] - Empty input provided
///
/// ## Metadata Model Errors
/// - [`Error::InvalidTag`] - Invalid tag construction or registration
/// - [`Error::ReadOnlyTagProvider`] - Mutation attempted on a frozen tag provider
/// - [`Error::InvalidValue`] - An entry value cannot be serialized
///
/// ## I/O Errors
/// - [`Error::FileError`] - Filesystem I/O errors
///
/// # Examples
///
/// ```rust
/// use exifscope::{Error, metadata::exif::ExifMetadata};
///
/// match ExifMetadata::deserialize(&[0x4D, 0x4D, 0x00, 0x2A], None) {
///     Ok(exif) => {
///         println!("parsed {} directories", exif.directories().len());
///     }
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("Malformed EXIF: {} ({}:{})", message, file, line);
///     }
///     Err(Error::OutOfBounds) => {
///         eprintln!("truncated buffer");
///     }
///     Err(e) => {
///         eprintln!("Other error: {}", e);
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The buffer is damaged and could not be parsed as EXIF.
    ///
    /// This error indicates that the buffer structure does not conform to the
    /// TIFF/EXIF wire format. The error includes the source location where the
    /// malformation was detected for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while parsing the buffer.
    ///
    /// This error occurs when an offset or byte range claims data beyond the
    /// end of the EXIF buffer. It's a safety check to prevent buffer overruns
    /// during parsing.
    #[error("The range reference is outside the available EXIF buffer")]
    OutOfBounds,

    /// Provided input was empty.
    ///
    /// This error occurs when an empty buffer is provided where actual
    /// EXIF data was expected.
    #[error("Provided input was empty")]
    Empty,

    /// A tag could not be constructed or registered.
    ///
    /// Tags form a parent/child hierarchy where only the root and directory
    /// pointer tags may act as parents. This error occurs when that constraint
    /// is violated, or when the root tag is used where a regular tag is required.
    #[error("Invalid tag - {0}")]
    InvalidTag(String),

    /// Mutation was attempted on a read-only tag provider.
    ///
    /// Frozen providers (such as the built-in provider) reject all add and
    /// remove operations.
    #[error("The tag provider is read-only")]
    ReadOnlyTagProvider,

    /// An entry value cannot be serialized.
    ///
    /// This error occurs when serializing an entry whose value is incompatible
    /// with the wire format, such as an empty array value.
    #[error("Invalid entry value - {0}")]
    InvalidValue(String),

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur during file operations
    /// such as reading from disk, permission issues, or filesystem errors.
    #[error("{0}")]
    FileError(#[from] std::io::Error),
}
