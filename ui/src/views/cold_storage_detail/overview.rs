//! Overview tab: stock summary and top-farmer analytics for one storage.

use api::StoreAdmin;
use dioxus::prelude::*;

use crate::analytics;
use crate::components::charts::{BarGroup, DistributionBars, StackedBarChart};
use crate::components::{EmptyState, ErrorBanner, Spinner, StatCard};
use crate::core::{fetch, format};

#[component]
pub fn OverviewTab(store: StoreAdmin) -> Element {
    let stock = fetch::use_api_resource({
        let id = store.id.clone();
        move |client| {
            let id = id.clone();
            async move { client.stock_summary(&id).await }
        }
    });
    let top_farmers = fetch::use_api_resource({
        let id = store.id.clone();
        move |client| {
            let id = id.clone();
            async move { client.top_farmers(&id).await }
        }
    });

    let stock_view = stock.read_unchecked();
    let top_view = top_farmers.read_unchecked();

    let insights = match &*stock_view {
        Some(Ok(stock)) => Some(analytics::stock_insights(stock)),
        _ => None,
    };
    let leaders = match &*top_view {
        Some(Ok(leaders)) => leaders.clone(),
        _ => Vec::new(),
    };

    let insight_cards = insights.as_ref().map(|insights| {
        let top_variety = insights.top_variety.clone();
        let dominant = insights.dominant_size.clone();
        let total = insights.total_inventory;
        let top_farmer = leaders.first().cloned();

        rsx! {
            div { class: "card-grid card-grid--four",
                StatCard {
                    label: "Total Inventory",
                    value: format::format_count(total),
                    description: "Total bags stored",
                }
                if let Some((variety, bags)) = top_variety {
                    StatCard {
                        label: "Top Variety",
                        value: variety,
                        description: "{format::format_count(bags)} bags stored",
                        subtext: format!(
                            "{} of total inventory",
                            format::format_percent(if total == 0 { 0.0 } else { bags as f64 / total as f64 * 100.0 })
                        ),
                    }
                }
                if let Some(dominant) = dominant {
                    StatCard {
                        label: "Dominant Size",
                        value: dominant.size.clone(),
                        description: "{format::format_count(dominant.bags)} bags",
                        subtext: format!("{} of all bag sizes", format::format_percent(dominant.share)),
                    }
                }
                if let Some(farmer) = top_farmer {
                    {
                        let subtext = analytics::specialty(&farmer)
                            .map(|(size, bags)| {
                                format!("Specializes in {size} ({} bags)", format::format_count(bags))
                            })
                            .unwrap_or_default();
                        rsx! {
                            StatCard {
                                label: "Top Farmer",
                                value: farmer.farmer_name.clone(),
                                description: "{format::format_count(farmer.total_bags)} bags stored",
                                subtext,
                            }
                        }
                    }
                }
            }
        }
    });

    let stock_section = match &*stock_view {
        None => rsx! {
            Spinner {}
        },
        Some(Err(err)) => rsx! {
            ErrorBanner { message: "Failed to load the stock summary: {err}" }
        },
        Some(Ok(stock)) if stock.is_empty() => rsx! {
            EmptyState { message: "No stock summary data available" }
        },
        Some(Ok(stock)) => {
            let groups: Vec<BarGroup> = analytics::variety_totals(stock)
                .into_iter()
                .map(|entry| BarGroup {
                    label: entry.variety,
                    segments: entry.by_size,
                })
                .collect();
            let shares = analytics::size_shares(stock);

            rsx! {
                section { class: "overview__section",
                    h2 { "Stock Summary by Variety" }
                    p { class: "overview__caption", "Current stock per variety, split by bag size" }
                    StackedBarChart { groups }
                }
                section { class: "overview__section",
                    h2 { "Size Distribution" }
                    p { class: "overview__caption", "Share of stored bags per size category" }
                    DistributionBars { shares }
                }
            }
        }
    };

    let farmers_section = match &*top_view {
        None => rsx! {
            Spinner {}
        },
        Some(Err(err)) => rsx! {
            ErrorBanner { message: "Failed to load top farmers: {err}" }
        },
        Some(Ok(leaders)) if leaders.is_empty() => rsx! {
            EmptyState { message: "No farmer rankings yet" }
        },
        Some(Ok(leaders)) => {
            let groups: Vec<BarGroup> = leaders
                .iter()
                .map(|farmer| BarGroup {
                    label: farmer.farmer_name.clone(),
                    segments: farmer
                        .bag_summary
                        .iter()
                        .map(|(size, bags)| (size.clone(), *bags))
                        .collect(),
                })
                .collect();

            let total = insights
                .as_ref()
                .map(|insights| insights.total_inventory)
                .unwrap_or(0);
            let share = analytics::top_farmer_share(leaders, total);
            let ratio = analytics::lead_ratio(leaders);
            let leader = leaders.first();

            rsx! {
                section { class: "overview__section",
                    h2 { "Top Farmers" }
                    p { class: "overview__caption", "Farmers with the highest stored inventory, by bag size" }
                    div { class: "overview__split",
                        StackedBarChart { groups }
                        div { class: "overview__aside",
                            if let Some(leader) = leader {
                                div { class: "insight-box",
                                    h3 { class: "insight-box__title", "Top Farmer Insights" }
                                    p { class: "insight-box__line",
                                        strong { "{leader.farmer_name}" }
                                        " · {format::format_count(leader.total_bags)} bags"
                                    }
                                    if let Some((size, bags)) = analytics::specialty(leader) {
                                        p { class: "insight-box__line",
                                            "Specialty: {size} ({format::format_count(bags)} bags)"
                                        }
                                    }
                                    if let Some(ratio) = ratio {
                                        p { class: "insight-box__line",
                                            "Stores {ratio:.1}x more than the second-ranked farmer"
                                        }
                                    }
                                }
                            }
                            if let Some(share) = share {
                                div { class: "insight-box",
                                    h3 { class: "insight-box__title", "Storage Share" }
                                    p { class: "insight-box__figure", "{format::format_percent(share)}" }
                                    p { class: "insight-box__line", "of total inventory" }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "overview",
            div { class: "overview__header",
                h1 { "Cold Storage Overview" }
                p { class: "overview__caption",
                    "Current inventory and distribution statistics for {store.cold_storage_details.cold_storage_name}"
                }
            }
            {insight_cards}
            {stock_section}
            {farmers_section}
        }
    }
}
