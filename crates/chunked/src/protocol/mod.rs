//! Types shared by the chunked codecs.
//!
//! - [`Settings`]: limits applied while decoding
//! - [`Decoded`]: outcome of one slice decoding step
//! - [`PayloadItem`]: item of a decoded payload stream
//! - [`ParseError`]: malformed input and limit violations

mod error;
pub use error::ParseError;

mod message;
pub use message::Decoded;
pub use message::PayloadItem;

mod settings;
pub use settings::Settings;
