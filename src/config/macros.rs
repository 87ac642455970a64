/// Define a configuration struct with embedded defaults
///
/// Generates the struct with public fields, a `Default` implementation built
/// from the per-field default expressions, and serde support with
/// `#[serde(default)]` so omitted keys fall back individually.
///
/// # Example
/// ```ignore
/// config_struct! {
///     pub struct RateLimitConfig {
///         max_requests: u32 = 30,
///         window_secs: u64 = 60,
///     }
/// }
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
