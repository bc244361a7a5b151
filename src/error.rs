#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid not-found pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("parse error: {reason}")]
    Parse { reason: String },
}
