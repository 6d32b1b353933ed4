use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

use crate::models::VariantRecord;

/// `GET /variation/human/{rsid}` 的响应体，仅保留用到的字段
#[derive(Debug, Default, Deserialize)]
pub struct VariationPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default)]
    pub mappings: Vec<Mapping>,
    #[serde(default, deserialize_with = "lenient")]
    pub most_severe_consequence: Option<String>,
    #[serde(rename = "MAF", default, deserialize_with = "lenient")]
    pub maf: Option<f64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Mapping {
    #[serde(default, deserialize_with = "lenient")]
    pub seq_region_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub start: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub allele_string: Option<String>,
}

/// `GET /vep/human/id/{rsid}` 返回的数组元素
#[derive(Debug, Deserialize)]
pub struct VepItem {
    #[serde(default)]
    pub transcript_consequences: Vec<TranscriptConsequence>,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptConsequence {
    #[serde(default, deserialize_with = "lenient")]
    pub gene_symbol: Option<String>,
}

/// 字段类型与预期不符时视为缺失，而不是让整个响应解析失败
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

pub fn collect_gene_symbols(items: &[VepItem]) -> BTreeSet<String> {
    items
        .iter()
        .flat_map(|item| item.transcript_consequences.iter())
        .filter_map(|tc| tc.gene_symbol.as_deref())
        .filter(|symbol| !symbol.is_empty())
        .map(str::to_string)
        .collect()
}

impl VariationPayload {
    pub fn into_record(self, rsid: &str, genes: BTreeSet<String>) -> VariantRecord {
        let mapping = self.mappings.into_iter().next().unwrap_or_default();
        VariantRecord {
            rsid: self.name.unwrap_or_else(|| rsid.to_string()),
            chromosome: mapping.seq_region_name,
            position: mapping.start,
            alleles: mapping.allele_string,
            minor_allele_freq: self.maf,
            genes,
            consequence: self.most_severe_consequence,
        }
    }
}
