//! The built-in `Core` error domain.

use core::fmt;

use super::{CodeType, DomainErrc, ErrorCode, ErrorDomain, IdType, SupportDataType};

/// Errors reported by the `ara::core` functional cluster itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CoreErrc {
    /// An invalid argument was passed to a function.
    InvalidArgument = 22,
    /// A string is not a valid model element shortname.
    InvalidMetaModelShortname = 137,
    /// A string is not a valid model element path.
    InvalidMetaModelPath = 138,
}

impl CoreErrc {
    pub const fn from_code(code: CodeType) -> Option<Self> {
        match code {
            22 => Some(CoreErrc::InvalidArgument),
            137 => Some(CoreErrc::InvalidMetaModelShortname),
            138 => Some(CoreErrc::InvalidMetaModelPath),
            _ => None,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            CoreErrc::InvalidArgument => "Invalid argument",
            CoreErrc::InvalidMetaModelShortname => "Invalid meta model shortname",
            CoreErrc::InvalidMetaModelPath => "Invalid meta model path",
        }
    }
}

impl fmt::Display for CoreErrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl DomainErrc for CoreErrc {
    fn domain() -> &'static dyn ErrorDomain {
        get_core_error_domain()
    }

    fn code(self) -> CodeType {
        self as CodeType
    }
}

/// Domain of [`CoreErrc`].
#[derive(Debug)]
pub struct CoreErrorDomain {
    _private: (),
}

impl CoreErrorDomain {
    pub const ID: IdType = 0x8000_0000_0000_0014;
}

static CORE_ERROR_DOMAIN: CoreErrorDomain = CoreErrorDomain { _private: () };

impl ErrorDomain for CoreErrorDomain {
    fn id(&self) -> IdType {
        Self::ID
    }

    fn name(&self) -> &'static str {
        "Core"
    }

    fn message(&self, code: CodeType) -> &'static str {
        match CoreErrc::from_code(code) {
            Some(errc) => errc.message(),
            None => "Unknown error",
        }
    }
}

/// The process-wide [`CoreErrorDomain`] instance.
pub fn get_core_error_domain() -> &'static dyn ErrorDomain {
    &CORE_ERROR_DOMAIN
}

/// Builds an [`ErrorCode`] in the core domain.
pub fn make_error_code(code: CoreErrc, support_data: SupportDataType) -> ErrorCode {
    ErrorCode::from_errc(code, support_data)
}
