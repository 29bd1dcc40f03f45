//! Composite view: a product merged with its recommendations and reviews.

use serde::{Deserialize, Serialize};

use crate::{Product, Recommendation, Review};

/// Recommendation projected for the composite view (address dropped).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSummary {
    pub recommendation_id: i32,
    pub author: String,
    pub rate: i32,
}

impl From<&Recommendation> for RecommendationSummary {
    fn from(r: &Recommendation) -> Self {
        Self {
            recommendation_id: r.recommendation_id,
            author: r.author.clone(),
            rate: r.rate,
        }
    }
}

/// Review projected for the composite view (address dropped).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub review_id: i32,
    pub author: String,
    pub subject: String,
}

impl From<&Review> for ReviewSummary {
    fn from(r: &Review) -> Self {
        Self {
            review_id: r.review_id,
            author: r.author.clone(),
            subject: r.subject.clone(),
        }
    }
}

/// Which process answered each part of a composite view.
///
/// `cmp` is the composite itself; `pro`, `rev` and `rec` are the product
/// address and the address of the first review/recommendation (empty when
/// there is none).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAddresses {
    cmp: String,
    pro: String,
    rev: String,
    rec: String,
}

impl ServiceAddresses {
    pub fn new(
        cmp: impl Into<String>,
        pro: impl Into<String>,
        rev: impl Into<String>,
        rec: impl Into<String>,
    ) -> Self {
        Self {
            cmp: cmp.into(),
            pro: pro.into(),
            rev: rev.into(),
            rec: rec.into(),
        }
    }

    /// Derive the addresses from the parts a composite view is built from.
    pub fn derive(
        composite_address: &str,
        product: &Product,
        recommendations: &[Recommendation],
        reviews: &[Review],
    ) -> Self {
        let rev = reviews
            .first()
            .map(|r| r.service_address.as_str())
            .unwrap_or_default();
        let rec = recommendations
            .first()
            .map(|r| r.service_address.as_str())
            .unwrap_or_default();

        Self::new(composite_address, product.service_address.as_str(), rev, rec)
    }

    pub fn cmp(&self) -> &str {
        &self.cmp
    }

    pub fn pro(&self) -> &str {
        &self.pro
    }

    pub fn rev(&self) -> &str {
        &self.rev
    }

    pub fn rec(&self) -> &str {
        &self.rec
    }
}

/// The composite product view. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAggregate {
    product_id: i32,
    name: String,
    weight: i32,
    recommendations: Vec<RecommendationSummary>,
    reviews: Vec<ReviewSummary>,
    service_addresses: ServiceAddresses,
}

impl ProductAggregate {
    /// Merge a product with its recommendations and reviews.
    ///
    /// Summaries keep the source order one-to-one.
    pub fn assemble(
        product: &Product,
        recommendations: &[Recommendation],
        reviews: &[Review],
        composite_address: &str,
    ) -> Self {
        Self {
            product_id: product.product_id,
            name: product.name.clone(),
            weight: product.weight,
            recommendations: recommendations.iter().map(RecommendationSummary::from).collect(),
            reviews: reviews.iter().map(ReviewSummary::from).collect(),
            service_addresses: ServiceAddresses::derive(
                composite_address,
                product,
                recommendations,
                reviews,
            ),
        }
    }

    pub fn product_id(&self) -> i32 {
        self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn recommendations(&self) -> &[RecommendationSummary] {
        &self.recommendations
    }

    pub fn reviews(&self) -> &[ReviewSummary] {
        &self.reviews
    }

    pub fn service_addresses(&self) -> &ServiceAddresses {
        &self.service_addresses
    }
}
