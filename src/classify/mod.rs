pub mod matcher;

use serde::{Deserialize, Serialize};
use strum::VariantNames;

use crate::cell::CellError;
use crate::classify::matcher::NotFoundMatcher;
use crate::error::Error;

/// How an instance name is placed into the not-found pattern.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::VariantNames,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Name is interpolated as-is; regex metacharacters in it take effect.
    ///
    /// Stricter than RE2 about braces: a name such as `emp{` or `a{}b` is rejected
    /// as a bad repetition instead of being read as literal text.
    #[default]
    Pattern,
    /// Name is escaped and only ever matches literally.
    Literal,
}

impl MatchMode {
    pub fn parse(value: &str) -> Result<Self, Error> {
        value.parse::<Self>().map_err(|_| Error::Parse {
            reason: format!(
                "unknown match mode `{value}`, expected one of: {}",
                Self::VARIANTS.join(", ")
            ),
        })
    }
}

/// `cell`, one or more characters, the instance name, one or more characters, `not found`.
pub fn build_not_found_pattern(instance: &str, mode: MatchMode) -> String {
    let name = match mode {
        MatchMode::Pattern => std::borrow::Cow::Borrowed(instance),
        MatchMode::Literal => std::borrow::Cow::Owned(regex::escape(instance)),
    };
    format!("cell(.)+({name})(.)+not found")
}

/// Tests a rendered error message. Compiles the pattern on every call; use
/// [`NotFoundMatcher`] when checking many messages for the same instance.
pub fn message_indicates_not_found(
    instance: &str,
    message: &str,
    mode: MatchMode,
) -> Result<bool, Error> {
    Ok(NotFoundMatcher::new(instance, mode)?.matches(message))
}

pub fn is_cell_instance_not_found(
    instance: &str,
    err: &(dyn std::error::Error + 'static),
) -> Result<bool, Error> {
    is_cell_instance_not_found_with(instance, err, MatchMode::Pattern)
}

/// A [`CellError::InstanceNotFound`] anywhere in `err`'s source chain is decided by
/// name equality and never compiles a pattern. Everything else falls back to matching
/// `err`'s message.
pub fn is_cell_instance_not_found_with(
    instance: &str,
    err: &(dyn std::error::Error + 'static),
    mode: MatchMode,
) -> Result<bool, Error> {
    if let Some(found) = structured_not_found(err) {
        let matched = found == instance;
        tracing::debug!(
            instance,
            %mode,
            matched,
            structured = true,
            "classified error"
        );
        return Ok(matched);
    }
    message_indicates_not_found(instance, &err.to_string(), mode)
}

pub(crate) fn structured_not_found<'a>(
    err: &'a (dyn std::error::Error + 'static),
) -> Option<&'a str> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(CellError::InstanceNotFound { instance }) = e.downcast_ref::<CellError>() {
            return Some(instance.as_str());
        }
        current = e.source();
    }
    None
}
