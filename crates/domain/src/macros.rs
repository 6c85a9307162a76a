//! Macro for implementing Display and FromStr for label enums
//!
//! Configuration knobs and stage labels are plain string enums. This macro
//! gives them a single lowercase string form for both printing and parsing.
//!
//! # Example
//!
//! ```rust
//! use timesync_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Stdout,
//!     File,
//! }
//!
//! impl_label_conversions!(Channel {
//!     Stdout => "stdout",
//!     File => "file",
//! });
//!
//! assert_eq!(Channel::File.to_string(), "file");
//! assert_eq!("STDOUT".parse::<Channel>(), Ok(Channel::Stdout));
//! ```

/// Implements Display and FromStr traits for label enums
///
/// Parsing is case-insensitive and trims surrounding whitespace; display
/// always yields the declared string.
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Stable string form of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Stage {
        Log,
        Summary,
    }

    impl_label_conversions!(Stage {
        Log => "log",
        Summary => "summary",
    });

    #[test]
    fn displays_declared_label() {
        assert_eq!(Stage::Log.to_string(), "log");
        assert_eq!(Stage::Summary.as_str(), "summary");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Stage::from_str("SUMMARY").unwrap(), Stage::Summary);
        assert_eq!(Stage::from_str(" Log ").unwrap(), Stage::Log);
    }

    #[test]
    fn rejects_unknown_label() {
        let result = Stage::from_str("audit");
        assert!(result.unwrap_err().contains("Invalid Stage: audit"));
    }
}
