//! Keyword analysis payloads: summary, section order, difficulty, related keywords and listings
use crate::constants::{
    BLUE_OCEAN_RATIO, EASY_DIFFICULTY, MEDIUM_DIFFICULTY, MODERATE_RATIO, PLACEHOLDER,
    SECTION_PREVIEW_LEN, VOLUME_GAUGE_CEILING,
};
use crate::utils::{format_count, lenient_count, lenient_float, lenient_label};
use serde::{Deserialize, Serialize};

/// Successful payload of the primary analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(default)]
    pub keyword: Option<String>,
    pub summary: Summary,
    #[serde(default)]
    pub sections: SectionLists,
}

/// Search volume versus published-document supply for one keyword
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default, deserialize_with = "lenient_count")]
    pub pc: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub mobile: u64,
    #[serde(rename = "total_vol", default, deserialize_with = "lenient_count")]
    pub total_volume: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub doc_count: u64,
    #[serde(default, deserialize_with = "lenient_float")]
    pub ratio: f64,
}

impl Summary {
    pub fn ratio_band(&self) -> RatioBand {
        RatioBand::classify(self.ratio)
    }

    /// Fill level of the volume gauge, 0..=100
    pub fn volume_gauge_percent(&self) -> u16 {
        let percent = self.total_volume.saturating_mul(100) / VOLUME_GAUGE_CEILING;
        percent.min(100) as u16
    }
}

/// Competitiveness bands derived from the document/volume ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioBand {
    BlueOcean,
    Moderate,
    RedOcean,
}

impl RatioBand {
    pub fn classify(ratio: f64) -> Self {
        if ratio < BLUE_OCEAN_RATIO {
            RatioBand::BlueOcean
        } else if ratio < MODERATE_RATIO {
            RatioBand::Moderate
        } else {
            RatioBand::RedOcean
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatioBand::BlueOcean => "💎 Blue ocean",
            RatioBand::Moderate => "✨ Moderate",
            RatioBand::RedOcean => "🔥 Red ocean",
        }
    }
}

/// Order in which result sections appear on the search portal, per channel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionLists {
    #[serde(default)]
    pub pc: Vec<String>,
    #[serde(default)]
    pub mobile: Vec<String>,
}

/// First few sections per channel, numbered, with a placeholder for empty channels
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPreview {
    pub pc: Vec<String>,
    pub mobile: Vec<String>,
}

impl SectionPreview {
    fn channel(sections: &[String]) -> Vec<String> {
        if sections.is_empty() {
            return vec![PLACEHOLDER.to_string()];
        }
        sections
            .iter()
            .take(SECTION_PREVIEW_LEN)
            .enumerate()
            .map(|(i, s)| format!("{}. {}", i + 1, s))
            .collect()
    }
}

impl From<&SectionLists> for SectionPreview {
    fn from(lists: &SectionLists) -> Self {
        Self {
            pc: Self::channel(&lists.pc),
            mobile: Self::channel(&lists.mobile),
        }
    }
}

/// Ranking difficulty estimated from the top results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyResult {
    #[serde(rename = "difficulty_score", deserialize_with = "difficulty_score")]
    pub score: u8,
    #[serde(rename = "difficulty", default)]
    pub label: String,
}

fn difficulty_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = lenient_count(deserializer)?;
    Ok(raw.min(100) as u8)
}

impl DifficultyResult {
    pub fn band(&self) -> DifficultyBand {
        DifficultyBand::classify(self.score)
    }
}

/// Display band for a difficulty score, independent of the ratio bands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyBand {
    Easy,
    Medium,
    Hard,
}

impl DifficultyBand {
    pub fn classify(score: u8) -> Self {
        if score < EASY_DIFFICULTY {
            DifficultyBand::Easy
        } else if score < MEDIUM_DIFFICULTY {
            DifficultyBand::Medium
        } else {
            DifficultyBand::Hard
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedKeyword {
    pub keyword: String,
    #[serde(rename = "total", default, deserialize_with = "lenient_count")]
    pub total_volume: u64,
    #[serde(rename = "docs", default, deserialize_with = "lenient_count")]
    pub doc_count: u64,
    #[serde(default, deserialize_with = "lenient_float")]
    pub ratio: f64,
}

/// One entry of a result listing. Commerce results carry a price, everything else is a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawResultItem")]
pub enum ResultItem {
    Document {
        title: String,
        description: String,
        source: Option<String>,
        date: Option<String>,
        link: String,
    },
    Commerce {
        title: String,
        price: u64,
        mall: Option<String>,
        link: String,
    },
}

impl ResultItem {
    pub fn title(&self) -> &str {
        match self {
            ResultItem::Document { title, .. } | ResultItem::Commerce { title, .. } => title,
        }
    }

    pub fn link(&self) -> &str {
        match self {
            ResultItem::Document { link, .. } | ResultItem::Commerce { link, .. } => link,
        }
    }

    /// Description for documents, price for commerce results
    pub fn detail(&self) -> String {
        match self {
            ResultItem::Document { description, .. } => description.clone(),
            ResultItem::Commerce { price, .. } => format!("{}원", format_count(*price)),
        }
    }

    /// Source attribution line, e.g. `blogger | 20240101`
    pub fn attribution(&self) -> String {
        match self {
            ResultItem::Document { source, date, .. } => {
                match (source.as_deref(), date.as_deref()) {
                    (Some(s), Some(d)) => format!("{} | {}", s, d),
                    (Some(s), None) => s.to_string(),
                    (None, Some(d)) => format!("| {}", d),
                    (None, None) => String::new(),
                }
            }
            ResultItem::Commerce { mall, .. } => mall.clone().unwrap_or_default(),
        }
    }
}

/// Result object exactly as the search endpoint returns it
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResultItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default, rename = "originallink")]
    original_link: Option<String>,
    #[serde(default, rename = "bloggername")]
    blogger_name: Option<String>,
    #[serde(default, rename = "postdate")]
    post_date: Option<String>,
    #[serde(default)]
    pub_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_label")]
    lprice: Option<String>,
    #[serde(default)]
    mall_name: Option<String>,
}

impl From<RawResultItem> for ResultItem {
    fn from(raw: RawResultItem) -> Self {
        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
        let title = non_empty(raw.title)
            .or_else(|| non_empty(raw.blogger_name.clone()))
            .unwrap_or_else(|| "Untitled".to_string());
        let link = non_empty(raw.link)
            .or_else(|| non_empty(raw.original_link))
            .unwrap_or_default();

        match raw.lprice {
            Some(price) => ResultItem::Commerce {
                title,
                price: price.trim().parse().unwrap_or(0),
                mall: non_empty(raw.mall_name),
                link,
            },
            None => ResultItem::Document {
                title,
                description: raw.description.unwrap_or_default(),
                source: non_empty(raw.blogger_name),
                date: non_empty(raw.post_date).or_else(|| non_empty(raw.pub_date)),
                link,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, RatioBand::BlueOcean)]
    #[case(0.0999, RatioBand::BlueOcean)]
    #[case(0.1, RatioBand::Moderate)]
    #[case(0.4999, RatioBand::Moderate)]
    #[case(0.5, RatioBand::RedOcean)]
    #[case(12.0, RatioBand::RedOcean)]
    fn test_ratio_bands(#[case] ratio: f64, #[case] expected: RatioBand) {
        assert_eq!(RatioBand::classify(ratio), expected);
    }

    #[rstest]
    #[case(0, DifficultyBand::Easy)]
    #[case(29, DifficultyBand::Easy)]
    #[case(30, DifficultyBand::Medium)]
    #[case(59, DifficultyBand::Medium)]
    #[case(60, DifficultyBand::Hard)]
    #[case(100, DifficultyBand::Hard)]
    fn test_difficulty_bands(#[case] score: u8, #[case] expected: DifficultyBand) {
        assert_eq!(DifficultyBand::classify(score), expected);
    }

    #[test]
    fn test_difficulty_bands_cover_every_score_once() {
        for score in 0..=100u8 {
            let bands = [score < 30, (30..60).contains(&score), score >= 60];
            assert_eq!(bands.iter().filter(|b| **b).count(), 1);
        }
    }

    #[test]
    fn test_decode_analysis_report() {
        let json = r#"{
            "keyword": "캠핑",
            "summary": {"pc": 1200, "mobile": 8800, "total_vol": 10000, "doc_count": 500, "ratio": 0.05},
            "sections": {"pc": ["블로그", "쇼핑", "뉴스", "이미지"], "mobile": []},
            "blog_ranks": []
        }"#;
        let report: AnalysisReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.summary.total_volume, 10000);
        assert_eq!(report.summary.ratio_band(), RatioBand::BlueOcean);

        let preview = SectionPreview::from(&report.sections);
        assert_eq!(preview.pc, vec!["1. 블로그", "2. 쇼핑", "3. 뉴스"]);
        assert_eq!(preview.mobile, vec!["-"]);
    }

    #[test]
    fn test_volume_gauge_is_capped() {
        let mut summary = Summary {
            total_volume: 25_000,
            ..Default::default()
        };
        assert_eq!(summary.volume_gauge_percent(), 25);
        summary.total_volume = 5_000_000;
        assert_eq!(summary.volume_gauge_percent(), 100);
    }

    #[test]
    fn test_difficulty_score_is_clamped() {
        let result: DifficultyResult =
            serde_json::from_str(r#"{"difficulty_score": 140, "difficulty": "hard"}"#).unwrap();
        assert_eq!(result.score, 100);
        assert_eq!(result.band(), DifficultyBand::Hard);
    }

    #[test]
    fn test_result_item_variants() {
        let blog: ResultItem = serde_json::from_str(
            r#"{"title": "캠핑 후기", "description": "주말 캠핑", "bloggername": "camper", "postdate": "20240501", "link": "https://blog.example/1"}"#,
        )
        .unwrap();
        assert_eq!(blog.title(), "캠핑 후기");
        assert_eq!(blog.attribution(), "camper | 20240501");

        let shop: ResultItem = serde_json::from_str(
            r#"{"title": "텐트", "lprice": "129000", "mallName": "캠핑몰", "link": "https://shop.example/2"}"#,
        )
        .unwrap();
        assert_eq!(shop.detail(), "129,000원");
        assert_eq!(shop.attribution(), "캠핑몰");
        assert!(matches!(shop, ResultItem::Commerce { .. }));
    }

    #[test]
    fn test_result_item_title_falls_back_to_source() {
        let item: ResultItem =
            serde_json::from_str(r#"{"bloggername": "camper", "originallink": "https://x"}"#)
                .unwrap();
        assert_eq!(item.title(), "camper");
        assert_eq!(item.link(), "https://x");
    }
}
