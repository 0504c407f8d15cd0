//! Header option model.
//!
//! A header value such as `permessage-deflate; client_max_window_bits, foo; a=1`
//! is a list of options. Each [`HeaderOption`] has a name and an ordered list
//! of [`Parameters`]; a parameter with an empty value is a flag and is written
//! without the `=value` suffix.
//!
//! The serializer never requires this exact model. It reads options through
//! the [`AsHeaderOption`] trait, so any type that can hand out a name and a
//! slice of [`Parameter`]s can be written directly.
//!
//! All names, keys and values are raw bytes. Nothing here assumes UTF-8.
//!
//! ## Examples
//!
//! ```rust
//! use httphead::HeaderOption;
//!
//! let opt = HeaderOption::new("permessage-deflate")
//!     .flag("client_no_context_takeover")
//!     .param("server_max_window_bits", "10");
//!
//! assert_eq!(opt.parameters().len(), 2);
//! assert_eq!(opt.parameters().get("server_max_window_bits"), Some(&b"10"[..]));
//! assert_eq!(
//!     opt.to_string(),
//!     "permessage-deflate;client_no_context_takeover;server_max_window_bits=10"
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Read-only view of a header option, as consumed by the serializer.
///
/// # Examples
///
/// ```rust
/// use httphead::{to_string, AsHeaderOption, Parameter};
///
/// struct Extension {
///     name: &'static str,
///     params: Vec<Parameter>,
/// }
///
/// impl AsHeaderOption for Extension {
///     fn name(&self) -> &[u8] {
///         self.name.as_bytes()
///     }
///
///     fn parameters(&self) -> &[Parameter] {
///         &self.params
///     }
/// }
///
/// let ext = Extension { name: "foo", params: vec![Parameter::new("bar", "1")] };
/// assert_eq!(to_string(&[ext]).unwrap(), "foo;bar=1");
/// ```
pub trait AsHeaderOption {
    /// Name of the option.
    fn name(&self) -> &[u8];

    /// Parameters of the option, in the order they must be written.
    fn parameters(&self) -> &[Parameter];
}

impl<T: AsHeaderOption + ?Sized> AsHeaderOption for &T {
    fn name(&self) -> &[u8] {
        (**self).name()
    }

    fn parameters(&self) -> &[Parameter] {
        (**self).parameters()
    }
}

/// A single `key[=value]` pair attached to an option.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(with = "bytes_text")]
    key: Vec<u8>,
    #[serde(with = "bytes_text", default)]
    value: Vec<u8>,
}

impl Parameter {
    /// Creates a `key=value` parameter. An empty value makes it a flag.
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Parameter {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a parameter with no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use httphead::Parameter;
    ///
    /// let p = Parameter::flag("client_no_context_takeover");
    /// assert!(p.is_flag());
    /// assert!(p.value().is_empty());
    /// ```
    pub fn flag(key: impl Into<Vec<u8>>) -> Self {
        Parameter {
            key: key.into(),
            value: Vec::new(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Returns `true` if the parameter has no value.
    #[must_use]
    pub fn is_flag(&self) -> bool {
        self.value.is_empty()
    }
}

/// Ordered list of option parameters.
///
/// Unlike a map, `Parameters` keeps duplicate keys and the exact order in
/// which they were added, since both are visible on the wire.
///
/// # Examples
///
/// ```rust
/// use httphead::Parameters;
///
/// let mut params = Parameters::new();
/// params.set("a", "1");
/// params.set("b", "");
/// params.set("a", "2");
///
/// assert_eq!(params.len(), 3);
/// assert_eq!(params.get("a"), Some(&b"1"[..]));
/// let keys: Vec<_> = params.iter().map(|p| p.key()).collect();
/// assert_eq!(keys, vec![&b"a"[..], &b"b"[..], &b"a"[..]]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(Vec<Parameter>);

impl Parameters {
    /// Creates an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Parameters(Vec::new())
    }

    /// Creates an empty parameter list with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Parameters(Vec::with_capacity(capacity))
    }

    /// Appends a parameter. Existing entries with the same key are kept.
    pub fn set(&mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.0.push(Parameter::new(key, value));
    }

    /// Returns the value of the first parameter named `key`.
    #[must_use]
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&[u8]> {
        let key = key.as_ref();
        self.0.iter().find(|p| p.key == key).map(|p| p.value())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the parameters, in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Parameter] {
        &self.0
    }
}

impl From<Vec<Parameter>> for Parameters {
    fn from(params: Vec<Parameter>) -> Self {
        Parameters(params)
    }
}

impl FromIterator<Parameter> for Parameters {
    fn from_iter<T: IntoIterator<Item = Parameter>>(iter: T) -> Self {
        Parameters(iter.into_iter().collect())
    }
}

impl Extend<Parameter> for Parameters {
    fn extend<T: IntoIterator<Item = Parameter>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Parameters {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A named header option with its parameters.
///
/// Two options are equal when their names are equal and their parameters
/// are equal pairwise, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeaderOption {
    #[serde(with = "bytes_text")]
    name: Vec<u8>,
    #[serde(default)]
    parameters: Parameters,
}

impl HeaderOption {
    /// Creates an option with no parameters.
    pub fn new(name: impl Into<Vec<u8>>) -> Self {
        HeaderOption {
            name: name.into(),
            parameters: Parameters::new(),
        }
    }

    /// Creates an option with the given parameters.
    pub fn with_parameters(name: impl Into<Vec<u8>>, parameters: impl Into<Parameters>) -> Self {
        HeaderOption {
            name: name.into(),
            parameters: parameters.into(),
        }
    }

    /// Appends a `key=value` parameter, builder style.
    #[must_use]
    pub fn param(mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        self.parameters.set(key, value);
        self
    }

    /// Appends a flag parameter, builder style.
    #[must_use]
    pub fn flag(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.parameters.0.push(Parameter::flag(key));
        self
    }

    #[must_use]
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }
}

impl AsHeaderOption for HeaderOption {
    fn name(&self) -> &[u8] {
        &self.name
    }

    fn parameters(&self) -> &[Parameter] {
        self.parameters.as_slice()
    }
}

/// Writes the option in its wire form. Non-UTF-8 bytes are replaced with
/// U+FFFD.
impl fmt::Display for HeaderOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::with_capacity(self.name.len() + 16);
        crate::ser::write_options(&mut buf, std::slice::from_ref(self)).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

/// Serde adapter for byte fields: text when the bytes are UTF-8, a byte
/// sequence otherwise.
mod bytes_text {
    use serde::de::{self, SeqAccess, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match std::str::from_utf8(bytes) {
            Ok(s) => serializer.serialize_str(s),
            Err(_) => serializer.serialize_bytes(bytes),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BytesVisitor;

        impl<'de> Visitor<'de> for BytesVisitor {
            type Value = Vec<u8>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or a byte sequence")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(value.as_bytes().to_vec())
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
                Ok(value.into_bytes())
            }

            fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
                Ok(value.to_vec())
            }

            fn visit_byte_buf<E: de::Error>(self, value: Vec<u8>) -> Result<Self::Value, E> {
                Ok(value)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(b) = seq.next_element::<u8>()? {
                    bytes.push(b);
                }
                Ok(bytes)
            }
        }

        deserializer.deserialize_any(BytesVisitor)
    }
}
