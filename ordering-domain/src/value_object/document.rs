//! 证件号码值对象（税号 / 身份证件）
//!
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

// 数字为主，允许横线与点号分隔
static DOCUMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9][0-9.\-]{3,19}$").unwrap());

/// 证件号码，构造时校验格式
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document(String);

impl Document {
    /// 校验并创建证件号码
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let document = Self(value.into());
        document.validate()?;
        Ok(document)
    }

    /// 获取证件号码字符串
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Document {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if DOCUMENT_PATTERN.is_match(&self.0) {
            Ok(())
        } else {
            Err(DomainError::InvalidDocument {
                value: self.0.clone(),
            })
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
