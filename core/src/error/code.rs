use core::{
    fmt,
    hash::{Hash, Hasher},
};

use super::{CodeType, DomainErrc, ErrorDomain, Exception, SupportDataType};

/// A raw error value together with the domain that defines it.
///
/// Equality compares [`value`](Self::value) and [`domain`](Self::domain);
/// [`support_data`](Self::support_data) is carried along but ignored.
#[derive(Clone, Copy)]
pub struct ErrorCode {
    value: CodeType,
    support_data: SupportDataType,
    domain: &'static dyn ErrorDomain,
}

static_assertions::assert_impl_all!(ErrorCode: Copy, Send, Sync);

impl ErrorCode {
    pub const fn new(
        value: CodeType,
        domain: &'static dyn ErrorDomain,
        support_data: SupportDataType,
    ) -> Self {
        ErrorCode {
            value,
            support_data,
            domain,
        }
    }

    /// Builds the code for `errc` in its own domain.
    pub fn from_errc<E: DomainErrc>(errc: E, support_data: SupportDataType) -> Self {
        ErrorCode::new(errc.code(), E::domain(), support_data)
    }

    pub const fn value(&self) -> CodeType {
        self.value
    }

    pub const fn domain(&self) -> &'static dyn ErrorDomain {
        self.domain
    }

    pub const fn support_data(&self) -> SupportDataType {
        self.support_data
    }

    /// The domain's text for this code.
    pub fn message(&self) -> &'static str {
        self.domain.message(self.value)
    }

    /// Converts the code into the exception its domain maps it to.
    ///
    /// ```
    /// use ara_core::{CoreErrc, ErrorCode, Exception};
    ///
    /// fn parse_flag(raw: &str) -> Result<bool, Exception> {
    ///     match raw {
    ///         "on" => Ok(true),
    ///         "off" => Ok(false),
    ///         _ => Err(ErrorCode::from(CoreErrc::InvalidArgument).raise()),
    ///     }
    /// }
    ///
    /// let error = parse_flag("maybe").unwrap_err();
    /// assert_eq!(error.to_string(), "Invalid argument");
    /// ```
    pub fn raise(&self) -> Exception {
        tracing::debug!(
            domain = self.domain.name(),
            value = self.value,
            support_data = self.support_data,
            "raising error code"
        );
        self.domain.throw_as_exception(*self)
    }
}

impl<E: DomainErrc> From<E> for ErrorCode {
    fn from(errc: E) -> Self {
        ErrorCode::from_errc(errc, SupportDataType::default())
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && *self.domain == *other.domain
    }
}

impl Eq for ErrorCode {}

impl<E: DomainErrc> PartialEq<E> for ErrorCode {
    fn eq(&self, other: &E) -> bool {
        self.value == other.code() && *self.domain == *E::domain()
    }
}

impl Hash for ErrorCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.domain.id().hash(state);
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCode")
            .field("domain", &self.domain.name())
            .field("value", &self.value)
            .field("support_data", &self.support_data)
            .finish()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for ErrorCode {}
