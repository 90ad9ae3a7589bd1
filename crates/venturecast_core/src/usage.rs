//! Usage tier estimator
//!
//! Pure token-count formulas for four typical monthly workloads, mapped to
//! the pricing tier whose token allowance fits. Used by display collaborators
//! to show which tier a given workload lands on at current prices.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::revenue::Segment;

/// Tokens per page of dense prose (legal documents, policy text)
const TOKENS_PER_DENSE_PAGE: f64 = 750.0;
/// Tokens per word of drafted content
const TOKENS_PER_WORD: f64 = 1.5;
/// Tokens per page of a patient record
const TOKENS_PER_RECORD_PAGE: f64 = 600.0;
/// Tokens per page of supporting medical context
const TOKENS_PER_CONTEXT_PAGE: f64 = 800.0;
/// Tokens per policy cross-reference
const TOKENS_PER_CROSS_REFERENCE: f64 = 1000.0;

/// Monthly token allowance ceilings per tier, in ascending order
const TIER_CEILINGS: [(f64, Segment); 3] = [
    (500_000.0, Segment::Freelancer),
    (1_500_000.0, Segment::Healthcare),
    (5_000_000.0, Segment::Enterprise),
];

/// A monthly workload shape with its sizing knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum UsageWorkload {
    /// Contract review: documents of dense pages
    Legal {
        documents: f64,
        pages_per_document: f64,
        tokens_per_page: f64,
    },
    /// Content production: articles plus research context per article
    ContentTeam {
        articles: f64,
        words_per_article: f64,
        research_pages_per_article: f64,
    },
    /// Policy analysis: policy documents plus cross-references
    Government {
        policies: f64,
        pages_per_policy: f64,
        cross_references: f64,
    },
    /// Clinical documentation: patient records plus medical context
    Healthcare {
        records: f64,
        pages_per_record: f64,
        context_pages: f64,
    },
}

impl UsageWorkload {
    /// Representative default sizing for each workload shape
    #[must_use]
    pub fn default_scenarios() -> [UsageWorkload; 4] {
        [
            UsageWorkload::Legal {
                documents: 20.0,
                pages_per_document: 50.0,
                tokens_per_page: TOKENS_PER_DENSE_PAGE,
            },
            UsageWorkload::ContentTeam {
                articles: 100.0,
                words_per_article: 2000.0,
                research_pages_per_article: 30.0,
            },
            UsageWorkload::Government {
                policies: 10.0,
                pages_per_policy: 200.0,
                cross_references: 500.0,
            },
            UsageWorkload::Healthcare {
                records: 500.0,
                pages_per_record: 15.0,
                context_pages: 50.0,
            },
        ]
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            UsageWorkload::Legal { .. } => "legal review",
            UsageWorkload::ContentTeam { .. } => "content team",
            UsageWorkload::Government { .. } => "government policy",
            UsageWorkload::Healthcare { .. } => "healthcare records",
        }
    }

    /// Total tokens this workload consumes per month
    pub fn monthly_tokens(&self) -> Result<f64> {
        let tokens = match *self {
            UsageWorkload::Legal {
                documents,
                pages_per_document,
                tokens_per_page,
            } => {
                check_non_negative("documents", documents)?;
                check_non_negative("pages per document", pages_per_document)?;
                check_non_negative("tokens per page", tokens_per_page)?;
                documents * pages_per_document * tokens_per_page
            }
            UsageWorkload::ContentTeam {
                articles,
                words_per_article,
                research_pages_per_article,
            } => {
                check_non_negative("articles", articles)?;
                check_non_negative("words per article", words_per_article)?;
                check_non_negative("research pages", research_pages_per_article)?;
                articles * words_per_article * TOKENS_PER_WORD
                    + articles * research_pages_per_article * TOKENS_PER_DENSE_PAGE
            }
            UsageWorkload::Government {
                policies,
                pages_per_policy,
                cross_references,
            } => {
                check_non_negative("policies", policies)?;
                check_non_negative("pages per policy", pages_per_policy)?;
                check_non_negative("cross references", cross_references)?;
                policies * pages_per_policy * TOKENS_PER_DENSE_PAGE
                    + cross_references * TOKENS_PER_CROSS_REFERENCE
            }
            UsageWorkload::Healthcare {
                records,
                pages_per_record,
                context_pages,
            } => {
                check_non_negative("records", records)?;
                check_non_negative("pages per record", pages_per_record)?;
                check_non_negative("context pages", context_pages)?;
                records * pages_per_record * TOKENS_PER_RECORD_PAGE
                    + context_pages * TOKENS_PER_CONTEXT_PAGE
            }
        };
        Ok(tokens)
    }
}

fn check_non_negative(what: &'static str, value: f64) -> Result<()> {
    if value < 0.0 {
        Err(ConfigError::NegativeUsage { what, value })
    } else {
        Ok(())
    }
}

/// Which tier fits a workload, at what price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierRecommendation {
    pub tier: Segment,
    pub monthly_tokens: f64,
    /// The tier's current monthly price
    pub monthly_price: f64,
}

/// Map a workload onto the cheapest tier whose token ceiling covers it.
///
/// `prices` are monthly tier prices in [`Segment::ALL`] order. Anything over
/// the largest ceiling lands on the Government tier.
pub fn recommend_tier(workload: &UsageWorkload, prices: [f64; 4]) -> Result<TierRecommendation> {
    let monthly_tokens = workload.monthly_tokens()?;

    let tier = TIER_CEILINGS
        .iter()
        .find(|&&(ceiling, _)| monthly_tokens <= ceiling)
        .map_or(Segment::Government, |&(_, tier)| tier);

    Ok(TierRecommendation {
        tier,
        monthly_tokens,
        monthly_price: prices[tier.index()],
    })
}
