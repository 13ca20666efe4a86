//! Aggregations behind the overview charts and insight cards. Pure data
//! shaping; the chart components only scale and draw what comes out of here.

use std::collections::BTreeMap;

use api::{FrequencyBucket, TopFarmer, VarietyStock};

/// Current stock per variety, broken down by bag size.
#[derive(Debug, Clone, PartialEq)]
pub struct VarietyTotal {
    pub variety: String,
    pub total: u32,
    pub by_size: Vec<(String, u32)>,
}

pub fn variety_totals(stock: &[VarietyStock]) -> Vec<VarietyTotal> {
    stock
        .iter()
        .map(|entry| VarietyTotal {
            variety: entry.variety.clone(),
            total: entry.sizes.iter().map(|size| size.current_quantity).sum(),
            by_size: entry
                .sizes
                .iter()
                .map(|size| (size.size.clone(), size.current_quantity))
                .collect(),
        })
        .collect()
}

/// Current stock aggregated across varieties, keyed by bag size.
pub fn size_distribution(stock: &[VarietyStock]) -> Vec<(String, u32)> {
    let mut by_size: BTreeMap<String, u32> = BTreeMap::new();
    for entry in stock {
        for size in &entry.sizes {
            *by_size.entry(size.size.clone()).or_default() += size.current_quantity;
        }
    }
    by_size.into_iter().collect()
}

pub fn total_inventory(stock: &[VarietyStock]) -> u32 {
    stock
        .iter()
        .flat_map(|entry| &entry.sizes)
        .map(|size| size.current_quantity)
        .sum()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SizeShare {
    pub size: String,
    pub bags: u32,
    /// Share of all stored bags, in percent.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StockInsights {
    pub total_inventory: u32,
    pub top_variety: Option<(String, u32)>,
    pub dominant_size: Option<SizeShare>,
}

pub fn stock_insights(stock: &[VarietyStock]) -> StockInsights {
    let total = total_inventory(stock);

    let top_variety = variety_totals(stock)
        .into_iter()
        .max_by_key(|entry| entry.total)
        .filter(|entry| entry.total > 0)
        .map(|entry| (entry.variety, entry.total));

    let dominant_size = size_distribution(stock)
        .into_iter()
        .max_by_key(|(_, bags)| *bags)
        .filter(|(_, bags)| *bags > 0)
        .map(|(size, bags)| SizeShare {
            size,
            bags,
            share: percentage(bags, total),
        });

    StockInsights {
        total_inventory: total,
        top_variety,
        dominant_size,
    }
}

/// Percentage shares for the size-distribution bars, largest first.
pub fn size_shares(stock: &[VarietyStock]) -> Vec<SizeShare> {
    let total = total_inventory(stock);
    let mut shares: Vec<SizeShare> = size_distribution(stock)
        .into_iter()
        .map(|(size, bags)| SizeShare {
            size,
            bags,
            share: percentage(bags, total),
        })
        .collect();
    shares.sort_by(|a, b| b.bags.cmp(&a.bags));
    shares
}

/// The leading farmer's share of the whole inventory, in percent.
pub fn top_farmer_share(top: &[TopFarmer], total_inventory: u32) -> Option<f64> {
    top.first()
        .map(|farmer| percentage(farmer.total_bags, total_inventory))
}

/// The bag size a farmer stores the most of.
pub fn specialty(farmer: &TopFarmer) -> Option<(String, u32)> {
    farmer
        .bag_summary
        .iter()
        .max_by_key(|(_, bags)| **bags)
        .map(|(size, bags)| (size.clone(), *bags))
}

/// How many times more the leading farmer stores than the runner-up.
pub fn lead_ratio(top: &[TopFarmer]) -> Option<f64> {
    match top {
        [first, second, ..] if second.total_bags > 0 => {
            Some(first.total_bags as f64 / second.total_bags as f64)
        }
        _ => None,
    }
}

/// A labelled point on a trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub value: f64,
}

pub fn frequency_points(buckets: &[FrequencyBucket]) -> Vec<TrendPoint> {
    buckets
        .iter()
        .map(|bucket| TrendPoint {
            label: bucket.period.clone(),
            value: bucket.count as f64,
        })
        .collect()
}

fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::BagStock;

    fn stock() -> Vec<VarietyStock> {
        vec![
            VarietyStock {
                variety: "Kufri Jyoti".into(),
                sizes: vec![
                    BagStock {
                        size: "Seed".into(),
                        initial_quantity: 500,
                        current_quantity: 300,
                    },
                    BagStock {
                        size: "Goli".into(),
                        initial_quantity: 200,
                        current_quantity: 100,
                    },
                ],
            },
            VarietyStock {
                variety: "Kufri Bahar".into(),
                sizes: vec![BagStock {
                    size: "Seed".into(),
                    initial_quantity: 150,
                    current_quantity: 100,
                }],
            },
        ]
    }

    fn top_farmers() -> Vec<TopFarmer> {
        vec![
            TopFarmer {
                id: "t1".into(),
                total_bags: 250,
                bag_summary: [("Seed".to_string(), 200), ("Goli".to_string(), 50)]
                    .into_iter()
                    .collect(),
                farmer_id: "F-9".into(),
                farmer_name: "Anil".into(),
            },
            TopFarmer {
                id: "t2".into(),
                total_bags: 100,
                bag_summary: [("Seed".to_string(), 100)].into_iter().collect(),
                farmer_id: "F-4".into(),
                farmer_name: "Bhola".into(),
            },
        ]
    }

    #[test]
    fn totals_use_current_quantities() {
        assert_eq!(total_inventory(&stock()), 500);
        let totals = variety_totals(&stock());
        assert_eq!(totals[0].total, 400);
        assert_eq!(totals[1].total, 100);
    }

    #[test]
    fn size_distribution_aggregates_across_varieties() {
        let distribution = size_distribution(&stock());
        assert_eq!(
            distribution,
            vec![("Goli".to_string(), 100), ("Seed".to_string(), 400)]
        );
    }

    #[test]
    fn insights_pick_top_variety_and_dominant_size() {
        let insights = stock_insights(&stock());
        assert_eq!(insights.total_inventory, 500);
        assert_eq!(insights.top_variety, Some(("Kufri Jyoti".to_string(), 400)));
        let dominant = insights.dominant_size.unwrap();
        assert_eq!(dominant.size, "Seed");
        assert_eq!(dominant.bags, 400);
        assert!((dominant.share - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_stock_yields_empty_insights() {
        let insights = stock_insights(&[]);
        assert_eq!(insights.total_inventory, 0);
        assert!(insights.top_variety.is_none());
        assert!(insights.dominant_size.is_none());
    }

    #[test]
    fn top_farmer_metrics() {
        let top = top_farmers();
        assert_eq!(top_farmer_share(&top, 500), Some(50.0));
        assert_eq!(specialty(&top[0]), Some(("Seed".to_string(), 200)));
        assert_eq!(lead_ratio(&top), Some(2.5));
        assert_eq!(lead_ratio(&top[..1]), None);
    }

    #[test]
    fn size_shares_sort_largest_first() {
        let shares = size_shares(&stock());
        assert_eq!(shares[0].size, "Seed");
        assert_eq!(shares[1].size, "Goli");
        assert!((shares[1].share - 20.0).abs() < f64::EPSILON);
    }
}
