//! Helper macro for port error enums whose variants carry a message.

/// Generate a `thiserror` enum plus one snake-case constructor per variant.
///
/// Every variant holds a single `message: String` field; the constructor
/// accepts anything convertible into `String`.
macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $format:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($format)]
                $variant { message: String },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Construct a [`", stringify!($name), "::", stringify!($variant), "`] error.")]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                }
            )*

            /// Message carried by the error.
            pub fn message(&self) -> &str {
                match self {
                    $(Self::$variant { message } => message.as_str(),)*
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Connection => "sample connection failed: {message}",
            QueryFailed => "sample query failed: {message}",
        }
    }

    #[test]
    fn constructors_use_snake_case_names() {
        let err = SamplePortError::query_failed("timeout");
        assert_eq!(err.to_string(), "sample query failed: timeout");
        assert_eq!(err.message(), "timeout");
    }

    #[test]
    fn constructors_accept_owned_strings() {
        let err = SamplePortError::connection(String::from("refused"));
        assert_eq!(
            err,
            SamplePortError::Connection {
                message: "refused".to_owned()
            }
        );
    }
}
