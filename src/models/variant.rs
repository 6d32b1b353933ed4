use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// 合并变异元数据与 VEP 基因信息后的标准化记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantRecord {
    pub rsid: String,
    pub chromosome: Option<String>,
    pub position: Option<i64>,
    pub alleles: Option<String>,
    pub minor_allele_freq: Option<f64>,
    /// 有序且去重
    pub genes: BTreeSet<String>,
    pub consequence: Option<String>,
}

/// 变异查询的错误分类，可被缓存所以需要 Clone
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("Variant not found in Ensembl.")]
    NotFound,
    #[error("Error querying Ensembl (status {status})")]
    Upstream { status: u16 },
    #[error("Timeout: request took longer than {} seconds", .after.as_secs_f64())]
    Timeout { after: Duration },
    // 详细信息只写入日志，不展示给用户
    #[error("Connection error with Ensembl. Please try again later.")]
    Connection(String),
    #[error("Unexpected response from Ensembl.")]
    Decode(String),
}

/// 缓存中保存的查询结果
pub type Lookup = Result<Arc<VariantRecord>, LookupError>;
