use std::fmt::{Debug, Display};
pub struct ScaleError(pub String);

impl Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ScaleError").field(&self.0).finish()
    }
}

impl std::error::Error for ScaleError {}

#[macro_export]
macro_rules! bs_err {
    ($msg:expr) => {
        ScaleError(format!(
            "bulkscale: {} @ {}:{}:{}",
            $msg,
            file!(),
            line!(),
            column!()
        ))
    };
    ($fmt:literal, $($arg:tt)+) => {
        ScaleError(format!(
            "bulkscale: {} @ {}:{}:{}",
            format_args!($fmt, $($arg)+),
            file!(),
            line!(),
            column!()
        ))
    };
}

#[macro_export]
macro_rules! bs_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err(bs_err!(err));
            }
        }
    };
}
