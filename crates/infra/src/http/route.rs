//! API routes
//!
//! A [`Route`] is a path relative to `<base>/v2/`. Identifiers substituted
//! into a template are percent-encoded so an id can never add path segments.

use std::fmt;

use url::Url;

use crate::api::errors::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route(String);

impl Route {
    /// Route with no placeholders, e.g. `customers/search`.
    pub fn fixed(path: &str) -> Self {
        Self(path.trim_matches('/').to_string())
    }

    /// Fill `{name}` placeholders in `template` from `params`.
    ///
    /// # Errors
    /// Returns `ApiError::InvalidArgument` when a placeholder has no value,
    /// a value is empty or a dot segment, or the template is malformed.
    pub fn format(template: &str, params: &[(&str, &str)]) -> Result<Self, ApiError> {
        let mut path = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            path.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| {
                ApiError::InvalidArgument(format!("unterminated placeholder in route '{template}'"))
            })?;
            let name = &after[..close];

            let value = params
                .iter()
                .find_map(|(key, value)| (*key == name).then_some(*value))
                .ok_or_else(|| {
                    ApiError::InvalidArgument(format!("missing value for '{name}' in '{template}'"))
                })?;
            if value.is_empty() {
                return Err(ApiError::InvalidArgument(format!("{name} must not be empty")));
            }
            // Dot segments collapse during URL resolution even when encoded.
            if value == "." || value == ".." {
                return Err(ApiError::InvalidArgument(format!("{name} must not be '{value}'")));
            }

            path.push_str(&urlencoding::encode(value));
            rest = &after[close + 1..];
        }
        path.push_str(rest);

        Ok(Self(path.trim_matches('/').to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute URL of this route under `api_root`, which must end in `/`.
    pub fn url(&self, api_root: &Url) -> Result<Url, ApiError> {
        api_root
            .join(&self.0)
            .map_err(|err| ApiError::InvalidArgument(format!("invalid route '{}': {err}", self.0)))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
