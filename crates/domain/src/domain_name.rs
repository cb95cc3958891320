use std::fmt;
use std::sync::Arc;

/// A domain name as a sequence of raw labels.
///
/// Label bytes are kept exactly as received: case is preserved and no character
/// set is assumed, so a name read off the wire can be written back unchanged.
/// Empty labels are never stored; the root name has no labels.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DomainName {
    labels: Arc<[Box<[u8]>]>,
}

impl DomainName {
    /// Builds a name from raw labels, skipping empty ones.
    pub fn from_labels<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Box<[u8]>>,
    {
        let labels: Vec<Box<[u8]>> = labels
            .into_iter()
            .map(Into::into)
            .filter(|label| !label.is_empty())
            .collect();
        Self {
            labels: labels.into(),
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &[u8]> {
        self.labels.iter().map(|label| &label[..])
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Splits on `.`; the text form cannot express a label containing a dot.
impl From<&str> for DomainName {
    fn from(name: &str) -> Self {
        Self::from_labels(name.split('.').map(str::as_bytes))
    }
}

impl From<String> for DomainName {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

/// Presentation form (RFC 1035 §5.1): labels joined with `.`, a literal `.` or `\`
/// inside a label escaped with `\`, bytes outside printable ASCII written as `\DDD`.
impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }

        for (i, label) in self.labels().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            for &byte in label {
                match byte {
                    b'.' | b'\\' => write!(f, "\\{}", byte as char)?,
                    0x21..=0x7E => write!(f, "{}", byte as char)?,
                    _ => write!(f, "\\{byte:03}")?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DomainName({self})")
    }
}
