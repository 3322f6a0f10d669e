use core::fmt;

/// Failures reported back to the explicit-messaging dispatcher.
///
/// Every error is terminal for the request that produced it. Instance state is
/// never partially modified when an error is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The addressed instance does not exist.
    InstanceNotFound,
    /// The attribute id is not implemented by this object.
    AttributeNotSupported,
    /// The attribute exists but cannot be written.
    AttributeNotSettable,
    /// The data supplied for a write is malformed or out of range.
    InvalidAttributeValue,
    /// The instance set could not be populated at start-up.
    InitializationFailure,
    /// The requested service is not implemented for this object.
    ServiceNotSupported,
    /// The encoded response does not fit the reply buffer.
    ReplyDataTooLarge,
}

impl Error {
    /// CIP general status code for this error.
    pub fn general_status(&self) -> u8 {
        match self {
            Error::InstanceNotFound => 0x05,
            Error::AttributeNotSupported => 0x14,
            Error::AttributeNotSettable => 0x0E,
            Error::InvalidAttributeValue => 0x09,
            Error::InitializationFailure => 0x10,
            Error::ServiceNotSupported => 0x08,
            Error::ReplyDataTooLarge => 0x11,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Error::InstanceNotFound => "path destination unknown",
            Error::AttributeNotSupported => "attribute not supported",
            Error::AttributeNotSettable => "attribute not settable",
            Error::InvalidAttributeValue => "invalid attribute value",
            Error::InitializationFailure => "ethernet link initialization failed",
            Error::ServiceNotSupported => "service not supported",
            Error::ReplyDataTooLarge => "reply data too large",
        };
        f.write_str(text)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
