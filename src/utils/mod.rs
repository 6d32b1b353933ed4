use std::sync::LazyLock;

use regex::Regex;

static RSID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^rs[0-9]+$").expect("valid rsID pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsidError {
    Empty,
    InvalidFormat,
}

/// 校验 rsID：`rs` 后跟至少一位数字，区分大小写，不做任何规范化
pub fn validate_rsid(rsid: &str) -> Result<&str, RsidError> {
    if rsid.is_empty() {
        Err(RsidError::Empty)
    } else if RSID_PATTERN.is_match(rsid) {
        Ok(rsid)
    } else {
        Err(RsidError::InvalidFormat)
    }
}

pub mod messages {
    pub const EMPTY_RSID: &str = "Please enter an rsID.";
    pub const INVALID_FORMAT_FORM: &str =
        "Invalid format! Use 'rs' followed by digits (e.g. rs1333049).";
    pub const INVALID_FORMAT_API: &str = "Invalid format. Use 'rs' followed by digits.";
}
